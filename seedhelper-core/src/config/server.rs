//! The persisted server configuration record

use serde::{Deserialize, Serialize};

use super::locations::{next_location_id, UploadLocation};
use crate::error::{ConfigError, Result};

/// The single persisted configuration record: server connection details,
/// auth credentials, and the upload location list.
///
/// Serializes in camelCase so the stored and exported shapes match the
/// browser extension's configuration format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Base URL of the ruTorrent installation (trailing slash insignificant)
    #[serde(default)]
    pub server_url: String,
    /// HTTP Basic auth username
    #[serde(default)]
    pub username: String,
    /// HTTP Basic auth password
    #[serde(default)]
    pub password: String,
    /// Whether to send the Basic auth header
    #[serde(default)]
    pub auth_enabled: bool,
    /// Upload location presets; at least one exists in any stored config
    #[serde(default)]
    pub upload_locations: Vec<UploadLocation>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let mut location = UploadLocation::new(next_location_id());
        location.is_active = true;
        Self {
            server_url: String::new(),
            username: String::new(),
            password: String::new(),
            auth_enabled: false,
            upload_locations: vec![location],
        }
    }
}

impl ServerConfig {
    /// Whether a server URL has been configured.
    pub fn has_server_url(&self) -> bool {
        !self.server_url.trim().is_empty()
    }

    /// Look up a location by its id.
    pub fn location_by_id(&self, id: &str) -> Option<&UploadLocation> {
        self.upload_locations.iter().find(|l| l.id == id)
    }

    /// Append a new inactive location with empty directory and label.
    ///
    /// Existing active flags are left untouched. Returns the new id.
    pub fn add_location(&mut self) -> String {
        let id = next_location_id();
        self.upload_locations.push(UploadLocation::new(id.clone()));
        id
    }

    /// Remove a location by id.
    ///
    /// The sole remaining location cannot be removed (the list is unchanged).
    /// If the removed location was active, the first remaining one becomes
    /// active, so the list settles back to exactly one active entry.
    pub fn remove_location(&mut self, id: &str) -> Result<()> {
        if self.upload_locations.len() <= 1 {
            return Err(ConfigError::LastLocation);
        }
        let index = self
            .upload_locations
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| ConfigError::LocationNotFound(id.to_string()))?;

        let removed = self.upload_locations.remove(index);
        if removed.is_active {
            if let Some(first) = self.upload_locations.first_mut() {
                first.is_active = true;
            }
        }
        Ok(())
    }

    /// Update a location's directory and/or label in place.
    pub fn edit_location(
        &mut self,
        id: &str,
        directory: Option<String>,
        label: Option<String>,
    ) -> Result<()> {
        let location = self
            .upload_locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| ConfigError::LocationNotFound(id.to_string()))?;

        if let Some(directory) = directory {
            location.directory = directory;
        }
        if let Some(label) = label {
            location.label = label;
        }
        Ok(())
    }

    /// Mark a location active and deactivate all others.
    pub fn set_active_location(&mut self, id: &str) -> Result<()> {
        if !self.upload_locations.iter().any(|l| l.id == id) {
            return Err(ConfigError::LocationNotFound(id.to_string()));
        }
        for location in &mut self.upload_locations {
            location.is_active = location.id == id;
        }
        Ok(())
    }
}

/// The configuration record as found on disk or in an import file.
///
/// Tolerates the legacy shape that predates upload locations: a flat
/// `defaultDirectory`/`defaultLabel` pair and no `uploadLocations` list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawServerConfig {
    #[serde(default)]
    pub server_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub auth_enabled: bool,
    #[serde(default)]
    pub upload_locations: Option<Vec<UploadLocation>>,
    #[serde(default)]
    pub default_directory: Option<String>,
    #[serde(default)]
    pub default_label: Option<String>,
}

/// Upgrade a raw configuration into the current shape.
///
/// This is the only place the legacy migration exists: a missing or empty
/// `uploadLocations` list is replaced by a single synthesized location
/// carrying forward `defaultDirectory`/`defaultLabel` (or empty strings),
/// marked active.
pub fn normalize(raw: RawServerConfig) -> ServerConfig {
    let upload_locations = match raw.upload_locations {
        Some(locations) if !locations.is_empty() => locations,
        _ => vec![UploadLocation {
            id: next_location_id(),
            directory: raw.default_directory.unwrap_or_default(),
            label: raw.default_label.unwrap_or_default(),
            is_active: true,
        }],
    };

    ServerConfig {
        server_url: raw.server_url,
        username: raw.username,
        password: raw.password,
        auth_enabled: raw.auth_enabled,
        upload_locations,
    }
}

/// Validate a server URL entered in the settings surface.
pub fn validate_server_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(ConfigError::Validation("Server URL is required".to_string()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(
            "Server URL must start with http:// or https://".to_string(),
        ));
    }
    Ok(())
}
