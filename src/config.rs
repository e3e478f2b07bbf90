use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

const APP_DIR: &str = "name-aura";
const CONFIG_FILE: &str = "aura.yaml";
const MIN_SWATCH_WIDTH: usize = 2;

/// Main configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => eyre::bail!("Invalid log level: {}", other),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emit ANSI colors in text output
    pub color: bool,
    /// Print the hex code under each swatch
    pub show_hex: bool,
    /// Width of a swatch block, in terminal cells
    pub swatch_width: usize,
    /// Default output format when --format is not given
    pub format: Option<OutputFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_hex: true,
            swatch_width: 6,
            format: None,
        }
    }
}

impl DisplayConfig {
    pub fn swatch_width(&self) -> usize {
        self.swatch_width.max(MIN_SWATCH_WIDTH)
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            let path = Self::expand_path(path);
            return Self::load_from_file(&path).context(format!("Failed to load config from {}", path.display()));
        }

        // Check AURA_CONFIG env var
        if let Ok(env_path) = std::env::var("AURA_CONFIG") {
            let path = Self::expand_path(Path::new(&env_path));
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from AURA_CONFIG: {}", e);
                    }
                }
            }
        }

        // Try AURA_DIR/aura.yaml, then ~/.config/name-aura/aura.yaml
        let path = Self::aura_dir().join(CONFIG_FILE);
        if path.exists() {
            match Self::load_from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        // Try ./aura.yaml (for development)
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load local config: {}", e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Write the config as YAML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let yaml_str = serde_yaml::to_string(self).context("Failed to serialize config")?;
        fs::write(path, yaml_str).context("Failed to write config file")?;
        Ok(())
    }

    /// Get the app directory (config file and logs)
    pub fn aura_dir() -> PathBuf {
        std::env::var("AURA_DIR")
            .map(|dir| Self::expand_path(Path::new(&dir)))
            .unwrap_or_else(|_| dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR))
    }

    /// Directory for the log file; AURA_DIR keeps everything in one place
    pub fn log_dir() -> PathBuf {
        match std::env::var("AURA_DIR") {
            Ok(dir) => Self::expand_path(Path::new(&dir)).join("logs"),
            Err(_) => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("logs"),
        }
    }

    /// Path written by `config set` when no file was named
    pub fn default_path() -> PathBuf {
        Self::aura_dir().join(CONFIG_FILE)
    }

    /// File `config set` writes to: --config, then AURA_CONFIG, then the default
    pub fn write_path(config_path: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_path {
            return Self::expand_path(path);
        }
        match std::env::var("AURA_CONFIG") {
            Ok(env_path) if !env_path.is_empty() => Self::expand_path(Path::new(&env_path)),
            _ => Self::default_path(),
        }
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}
