use colored::*;
use eyre::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;
use crate::render;

pub fn run(action: ConfigAction, config: &Config, config_path: Option<&PathBuf>) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format, config.display.format), config),
        ConfigAction::Get { key } => get(&key, config),
        ConfigAction::Set { key, value } => set(&key, &value, config, &Config::write_path(config_path)),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Html => {
            println!("{}", config_html(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "name-aura Configuration".bold());
            println!();

            println!("{}: {}", "log_level".cyan(), config.log_level.as_filter());
            println!();

            println!("{}:", "display".cyan());
            println!("  color: {}", config.display.color);
            println!("  show_hex: {}", config.display.show_hex);
            println!("  swatch_width: {}", config.display.swatch_width);
            println!("  format: {}", format_name(config.display.format));
        }
    }

    Ok(())
}

fn config_html(config: &Config) -> Result<String> {
    let yaml = serde_yaml::to_string(config)?;
    Ok(format!("<pre class='aura-config'>{}</pre>", render::escape_html(yaml.trim_end())))
}

fn format_name(format: Option<OutputFormat>) -> String {
    match format {
        Some(f) => format!("{:?}", f).to_lowercase(),
        None => "auto".to_string(),
    }
}

fn lookup(key: &str, config: &Config) -> Option<String> {
    match key {
        "log_level" | "log-level" => Some(config.log_level.as_filter().to_string()),
        "display.color" => Some(config.display.color.to_string()),
        "display.show_hex" => Some(config.display.show_hex.to_string()),
        "display.swatch_width" => Some(config.display.swatch_width.to_string()),
        "display.format" => Some(format_name(config.display.format)),
        _ => None,
    }
}

fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config) {
        Some(v) => println!("{}", v),
        None => {
            eprintln!("{} Unknown config key: {}", "✗".red(), key);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn apply(key: &str, value: &str, config: &Config) -> Result<Config> {
    let mut new_config = config.clone();

    match key {
        "log_level" | "log-level" => new_config.log_level = value.parse()?,
        "display.color" => {
            new_config.display.color = value.parse().context("Invalid boolean value (use 'true' or 'false')")?;
        }
        "display.show_hex" => {
            new_config.display.show_hex = value.parse().context("Invalid boolean value (use 'true' or 'false')")?;
        }
        "display.swatch_width" => {
            new_config.display.swatch_width = value.parse().context("Invalid width (use a positive integer)")?;
        }
        "display.format" => {
            new_config.display.format = match value {
                "auto" => None,
                other => Some(
                    <OutputFormat as clap::ValueEnum>::from_str(other, true)
                        .map_err(|e| eyre::eyre!("Invalid format '{}': {}", other, e))?,
                ),
            };
        }
        _ => {
            eyre::bail!("Unknown config key: {}", key);
        }
    }

    Ok(new_config)
}

fn set(key: &str, value: &str, config: &Config, config_path: &Path) -> Result<()> {
    println!("{} Setting {} = {}", "→".blue(), key.cyan(), value.green());

    let new_config = apply(key, value, config)?;
    new_config.save(config_path)?;

    println!("  {} Saved to {}", "✓".green(), config_path.display());

    Ok(())
}
