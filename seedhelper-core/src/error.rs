//! Error types for SeedHelper configuration handling

use thiserror::Error;

/// Core error type for configuration operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No server URL has been saved yet
    #[error("ruTorrent server is not configured")]
    ConfigMissing,

    /// Invalid input, malformed import file, or missing required field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upload location not found
    #[error("Upload location not found: {0}")]
    LocationNotFound(String),

    /// The sole remaining upload location cannot be removed
    #[error("Cannot remove the last upload location")]
    LastLocation,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ConfigError = json_err.into();

        match err {
            ConfigError::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();

        match err {
            ConfigError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ConfigMissing;
        assert_eq!(format!("{}", err), "ruTorrent server is not configured");

        let err = ConfigError::Validation("serverUrl is required".to_string());
        assert_eq!(format!("{}", err), "Validation error: serverUrl is required");

        let err = ConfigError::LocationNotFound("1700000000000".to_string());
        assert_eq!(
            format!("{}", err),
            "Upload location not found: 1700000000000"
        );

        let err = ConfigError::LastLocation;
        assert_eq!(format!("{}", err), "Cannot remove the last upload location");
    }
}
