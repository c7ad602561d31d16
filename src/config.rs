//! Configuration management for `segwind`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::SegwindError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `segwind`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegwindConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Report layout settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Dataset loading settings
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Report layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of segments listed as the top segments
    #[serde(default = "default_top_segments")]
    pub top_segments: usize,
    /// Also list the segments below the top ones
    #[serde(default = "default_show_others")]
    pub show_others: bool,
}

/// Dataset loading settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Fill in missing bearings from start/end coordinates
    #[serde(default = "default_derive_bearings")]
    pub derive_bearings: bool,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_top_segments() -> usize {
    5
}

fn default_show_others() -> bool {
    true
}

fn default_derive_bearings() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_segments: default_top_segments(),
            show_others: default_show_others(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            derive_bearings: default_derive_bearings(),
        }
    }
}

impl SegwindConfig {
    /// Load configuration from the given path, or the default file location,
    /// overlaid with environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.clone().or_else(Self::get_config_path);

        if let Some(config_file) = config_file {
            if config_path.is_some() && !config_file.exists() {
                return Err(SegwindError::config(format!(
                    "Config file not found: {}",
                    config_file.display()
                ))
                .into());
            }
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. SEGWIND__DISPLAY__TOP_SEGMENTS=10
        builder = builder.add_source(
            Environment::with_prefix("SEGWIND")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SegwindConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("segwind").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.display.top_segments == 0 {
            self.display.top_segments = default_top_segments();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.display.top_segments == 0 {
            return Err(SegwindError::config("Top segments must be at least 1").into());
        }
        if self.display.top_segments > 100 {
            return Err(
                SegwindError::config("Top segments cannot exceed 100").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SegwindError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SegwindError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
