//! CLI configuration management
//!
//! Settings of the CLI itself (where the daemon listens, output format),
//! separate from the shared server configuration the CLI edits.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use seedhelper_core::api::DEFAULT_CONTROL_URL;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Control URL of the local daemon
    pub daemon_url: String,

    /// Default output format
    pub output_format: String,

    /// Enable verbose logging by default
    pub verbose: bool,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            daemon_url: DEFAULT_CONTROL_URL.to_string(),
            output_format: "table".to_string(),
            verbose: false,
            timeout: 10,
        }
    }
}

impl CliConfig {
    /// Load configuration from file or fall back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).context("Failed to read CLI config file")?;
            toml::from_str(&content).context("Failed to parse CLI config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize CLI config")?;
        std::fs::write(&config_path, content).context("Failed to write CLI config file")?;

        Ok(())
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config")
        } else {
            return Err(anyhow::anyhow!("Cannot determine config directory"));
        };

        Ok(config_dir.join("seedhelper").join("cli.toml"))
    }

    /// Update configuration with environment variables
    pub fn apply_env_overrides(&mut self) {
        if let Ok(daemon_url) = std::env::var("SEEDHELPER_DAEMON") {
            self.daemon_url = daemon_url;
        }

        if let Ok(format) = std::env::var("SEEDHELPER_FORMAT") {
            if Self::validate_output_format(&format).is_ok() {
                self.output_format = format;
            }
        }

        if let Ok(verbose) = std::env::var("SEEDHELPER_VERBOSE") {
            self.verbose = verbose.to_lowercase() == "true" || verbose == "1";
        }

        if let Ok(timeout) = std::env::var("SEEDHELPER_TIMEOUT") {
            if let Ok(timeout) = timeout.parse() {
                if Self::validate_timeout(timeout).is_ok() {
                    self.timeout = timeout;
                }
            }
        }
    }

    /// Validate output format
    pub fn validate_output_format(format: &str) -> Result<()> {
        match format {
            "table" | "json" => Ok(()),
            _ => Err(anyhow::anyhow!(
                "Invalid output format '{}'. Must be 'table' or 'json'",
                format
            )),
        }
    }

    /// Validate timeout value
    pub fn validate_timeout(timeout: u64) -> Result<()> {
        if timeout == 0 {
            return Err(anyhow::anyhow!("Timeout must be greater than 0"));
        }
        if timeout > 300 {
            return Err(anyhow::anyhow!(
                "Timeout must be less than or equal to 300 seconds"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.daemon_url, DEFAULT_CONTROL_URL);
        assert_eq!(config.output_format, "table");
        assert!(!config.verbose);
        assert_eq!(config.timeout, 10);
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = CliConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_validate_output_format() {
        assert!(CliConfig::validate_output_format("table").is_ok());
        assert!(CliConfig::validate_output_format("json").is_ok());
        assert!(CliConfig::validate_output_format("xml").is_err());
    }

    #[test]
    fn test_validate_timeout() {
        assert!(CliConfig::validate_timeout(0).is_err());
        assert!(CliConfig::validate_timeout(301).is_err());
        assert!(CliConfig::validate_timeout(1).is_ok());
        assert!(CliConfig::validate_timeout(300).is_ok());
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("SEEDHELPER_DAEMON", "http://127.0.0.1:9000");
        std::env::set_var("SEEDHELPER_FORMAT", "json");
        std::env::set_var("SEEDHELPER_VERBOSE", "true");
        std::env::set_var("SEEDHELPER_TIMEOUT", "30");

        let mut config = CliConfig::default();
        config.apply_env_overrides();

        assert_eq!(config.daemon_url, "http://127.0.0.1:9000");
        assert_eq!(config.output_format, "json");
        assert!(config.verbose);
        assert_eq!(config.timeout, 30);

        std::env::remove_var("SEEDHELPER_DAEMON");
        std::env::remove_var("SEEDHELPER_FORMAT");
        std::env::remove_var("SEEDHELPER_VERBOSE");
        std::env::remove_var("SEEDHELPER_TIMEOUT");
    }
}
