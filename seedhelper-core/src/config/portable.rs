//! Portable JSON export/import of the whole configuration

use super::locations::UploadLocation;
use super::server::{normalize, RawServerConfig, ServerConfig};
use crate::error::{ConfigError, Result};

/// Default filename for exported configuration files.
pub const EXPORT_FILE_NAME: &str = "seedhelper-config.json";

/// Serialize the full configuration as pretty-printed UTF-8 JSON.
pub fn export_json(config: &ServerConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Parse and validate an imported configuration file.
///
/// Requires a non-empty `serverUrl`. A missing or malformed
/// `uploadLocations` list is replaced by a single synthesized default
/// location, and if no location is marked active the first one is forced
/// active. The caller overwrites the entire stored configuration with the
/// result; on any validation error nothing is written.
pub fn import_json(content: &str) -> Result<ServerConfig> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| ConfigError::Validation(format!("Invalid configuration file: {e}")))?;

    let server_url = value
        .get("serverUrl")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .trim();
    if server_url.is_empty() {
        return Err(ConfigError::Validation(
            "Configuration file is missing a server URL".to_string(),
        ));
    }

    let string_field = |name: &str| {
        value
            .get(name)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    };

    // A malformed locations list is treated like a missing one rather than
    // rejecting the whole file.
    let upload_locations = value
        .get("uploadLocations")
        .and_then(|v| serde_json::from_value::<Vec<UploadLocation>>(v.clone()).ok())
        .filter(|locations| !locations.is_empty());

    let raw = RawServerConfig {
        server_url: server_url.to_string(),
        username: string_field("username"),
        password: string_field("password"),
        auth_enabled: value
            .get("authEnabled")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        upload_locations,
        default_directory: value
            .get("defaultDirectory")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        default_label: value
            .get("defaultLabel")
            .and_then(|v| v.as_str())
            .map(str::to_string),
    };

    let mut config = normalize(raw);
    if !config.upload_locations.iter().any(|l| l.is_active) {
        if let Some(first) = config.upload_locations.first_mut() {
            first.is_active = true;
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> ServerConfig {
        let mut config = ServerConfig {
            server_url: "https://seed.example.com/rutorrent".to_string(),
            username: "alice".to_string(),
            password: "s3cret".to_string(),
            auth_enabled: true,
            ..ServerConfig::default()
        };
        config.upload_locations[0].directory = "/downloads/movies".to_string();
        config.upload_locations[0].label = "movies".to_string();
        let id = config.add_location();
        config
            .edit_location(&id, Some("/downloads/tv".to_string()), Some("tv".to_string()))
            .unwrap();
        config
    }

    #[test]
    fn test_export_is_pretty_json() {
        let json = export_json(&sample_config()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"serverUrl\": \"https://seed.example.com/rutorrent\""));
        assert!(json.contains("\"uploadLocations\""));
    }

    #[test]
    fn test_export_import_round_trip() {
        let config = sample_config();
        let json = export_json(&config).unwrap();
        let imported = import_json(&json).unwrap();

        assert_eq!(imported.server_url, config.server_url);
        assert_eq!(imported.upload_locations, config.upload_locations);
    }

    #[test]
    fn test_import_rejects_missing_server_url() {
        let err = import_json(r#"{"username": "alice"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = import_json(r#"{"serverUrl": "   "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let err = import_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_import_synthesizes_missing_locations() {
        let config = import_json(
            r#"{"serverUrl": "https://seed.example.com", "defaultDirectory": "/d", "defaultLabel": "x"}"#,
        )
        .unwrap();

        assert_eq!(config.upload_locations.len(), 1);
        assert_eq!(config.upload_locations[0].directory, "/d");
        assert_eq!(config.upload_locations[0].label, "x");
        assert!(config.upload_locations[0].is_active);
    }

    #[test]
    fn test_import_synthesizes_on_malformed_locations() {
        let config =
            import_json(r#"{"serverUrl": "https://seed.example.com", "uploadLocations": "oops"}"#)
                .unwrap();

        assert_eq!(config.upload_locations.len(), 1);
        assert!(config.upload_locations[0].is_active);
    }

    #[test]
    fn test_import_forces_one_active() {
        let config = import_json(
            r#"{
                "serverUrl": "https://seed.example.com",
                "uploadLocations": [
                    {"id": "a", "directory": "", "label": "", "isActive": false},
                    {"id": "b", "directory": "", "label": "", "isActive": false}
                ]
            }"#,
        )
        .unwrap();

        let active: Vec<&str> = config
            .upload_locations
            .iter()
            .filter(|l| l.is_active)
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(active, vec!["a"]);
    }
}
