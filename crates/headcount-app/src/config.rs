//! Configuration management for headcount
//!
//! Config stored at: ~/.config/headcount/config.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use headcount_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory override (session state, default export targets)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// History CSV path override
    #[serde(default)]
    pub history_csv: Option<PathBuf>,

    /// Report output directory override
    #[serde(default)]
    pub report_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            history_csv: None,
            report_dir: None,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("headcount");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("headcount");
        Ok(data_dir)
    }

    /// Get the history CSV path
    pub fn history_csv_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.history_csv {
            return Ok(path.clone());
        }
        Ok(self.data_dir()?.join("church_attendance.csv"))
    }

    /// Get the report output directory
    pub fn report_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.report_dir {
            return Ok(dir.clone());
        }
        Ok(self.data_dir()?.join("reports"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::parse(&content)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse config from its JSON representation
    fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headcount_types::Error;

    #[test]
    fn test_parse_invalid_json_is_config_error() {
        let err = Config::parse("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_parse_empty_object_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert!(config.data_dir.is_none());
        assert_eq!(config.output_format, OutputFormat::Table);
    }
}
