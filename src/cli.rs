use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::palette::Rgb;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored swatches for the terminal
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// HTML fragment with inline-styled swatches
    Html,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// Flag first, then the configured default.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>, configured: Option<OutputFormat>) -> OutputFormat {
        match user_choice.or(configured) {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "aura",
    about = "Turn your name into a unique color palette and personality",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to $AURA_DIR/logs/aura.log when AURA_DIR is set,\n\
                  otherwise to <data dir>/name-aura/logs/aura.log (e.g. ~/.local/share/name-aura/logs/aura.log)"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to aura.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose (debug) logging")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose", help = "Only log errors")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the palette and aura of one or more names
    Show {
        /// Names to read (one per line from stdin if omitted)
        names: Vec<String>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show only the color palette of a name
    Palette {
        /// Name to colorize
        name: String,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show only the aura traits of a name
    Traits {
        /// Name to read
        name: String,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Classify arbitrary colors into aura traits
    Classify {
        /// Colors as #rrggbb
        #[arg(required = true)]
        colors: Vec<Rgb>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key (dot notation)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// New value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_explicit_format_wins() {
        assert_eq!(
            OutputFormat::resolve(Some(OutputFormat::Html), Some(OutputFormat::Yaml)),
            OutputFormat::Html
        );
        assert_eq!(OutputFormat::resolve(None, Some(OutputFormat::Yaml)), OutputFormat::Yaml);
    }

    #[test]
    fn test_parse_show_with_names() {
        let cli = Cli::parse_from(["aura", "show", "Bo", "Ana", "-o", "json"]);
        match cli.command {
            Commands::Show { names, format } => {
                assert_eq!(names, vec!["Bo", "Ana"]);
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_parse_classify_colors() {
        let cli = Cli::parse_from(["aura", "classify", "#ff0000", "00ff00"]);
        match cli.command {
            Commands::Classify { colors, .. } => {
                assert_eq!(colors, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_after_help_names_both_log_locations() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("$AURA_DIR/logs/aura.log"));
        assert!(help.contains("name-aura/logs/aura.log"));
    }

    #[test]
    fn test_quiet_flag_parses() {
        let cli = Cli::parse_from(["aura", "-q", "show", "Bo"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["aura", "-q", "-v", "show", "Bo"]).is_err());
        assert!(Cli::try_parse_from(["aura", "show", "Bo", "--verbose", "--quiet"]).is_err());
    }

    #[test]
    fn test_classify_rejects_bad_hex() {
        assert!(Cli::try_parse_from(["aura", "classify", "#12345"]).is_err());
    }
}
