use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;

mod cli;
mod commands;
mod config;
mod render;

use name_aura::{aura, palette};

use cli::{Cli, Commands, OutputFormat};
use config::{Config, LogLevel};

fn effective_level(cli: &Cli, configured: LogLevel) -> LogLevel {
    if cli.quiet {
        LogLevel::Error
    } else if cli.verbose {
        LogLevel::Debug
    } else {
        configured
    }
}

fn setup_logging(log_level: &LogLevel) -> Result<()> {
    let log_dir = Config::log_dir();

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("aura.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(match log_level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        });
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let default_format = config.display.format;
    match cli.command {
        Commands::Show { names, format } => {
            commands::show::run(names, OutputFormat::resolve(format, default_format), &config)
        }
        Commands::Palette { name, format } => {
            commands::palette::run(&name, OutputFormat::resolve(format, default_format), &config)
        }
        Commands::Traits { name, format } => {
            commands::traits::run(&name, OutputFormat::resolve(format, default_format))
        }
        Commands::Classify { colors, format } => {
            commands::classify::run(&colors, OutputFormat::resolve(format, default_format))
        }
        Commands::Config { action } => commands::config::run(action, &config, cli.config.as_ref()),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging with log level from config (or RUST_LOG env var)
    setup_logging(&effective_level(&cli, config.log_level)).context("Failed to setup logging")?;

    if !config.display.color {
        colored::control::set_override(false);
    }

    info!("Starting aura with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
