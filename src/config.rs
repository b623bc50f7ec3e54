//! Configuration management for Daily Tools
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DATETIME_FORMAT, LOCAL_CONFIG_FILE};
use crate::tools::FormatSet;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub menu: MenuConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file
    pub enabled: bool,
    /// Minimum level written: off, error, warn, info, debug or trace
    pub level: String,
}

/// Interactive menu configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Wait for Enter after printing each result
    pub pause_after_result: bool,
    /// Also accept MM/DD/YYYY dates when converting to a timestamp
    pub accept_us_dates: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            pause_after_result: true,
            accept_us_dates: true,
        }
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level '{}', expected one of off, error, warn, info, debug, trace",
                self.level
            )
        })
    }
}

impl MenuConfig {
    /// Date formats the menu's converter accepts
    pub fn format_set(&self) -> FormatSet {
        if self.accept_us_dates {
            FormatSet::Extended
        } else {
            FormatSet::Standard
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.logging.level_filter()?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Daily Tools Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(DATETIME_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
