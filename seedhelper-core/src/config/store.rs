//! File-backed configuration store
//!
//! The store is the sole owner of persisted state. Consumers read a fresh
//! copy with [`ConfigStore::load`] at each invocation and write back the
//! full record with [`ConfigStore::save`]; there is no partial update and
//! no in-memory cache.

use std::fs;
use std::path::{Path, PathBuf};

use super::paths::default_config_path;
use super::server::{normalize, RawServerConfig, ServerConfig};
use crate::error::Result;

/// Repository over the single persisted [`ServerConfig`] record.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the default configuration path.
    pub fn new() -> Self {
        Self {
            path: default_config_path(),
        }
    }

    /// Store at an explicit path (used by tests and the `--config` flag).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, normalizing legacy shapes.
    ///
    /// A missing file yields the empty default configuration; the record is
    /// first materialized on disk by the first save.
    pub fn load(&self) -> Result<ServerConfig> {
        if !self.path.exists() {
            return Ok(ServerConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let raw: RawServerConfig = toml::from_str(&content)?;
        Ok(normalize(raw))
    }

    /// Persist the full record, creating parent directories as needed.
    pub fn save(&self, config: &ServerConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UploadLocation;
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> ConfigStore {
        ConfigStore::with_path(dir.path().join("config.toml"))
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let config = store.load().unwrap();
        assert!(!config.has_server_url());
        assert_eq!(config.upload_locations.len(), 1);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let mut config = ServerConfig {
            server_url: "https://seed.example.com/rutorrent".to_string(),
            username: "alice".to_string(),
            password: "s3cret".to_string(),
            auth_enabled: true,
            ..ServerConfig::default()
        };
        config.upload_locations[0].directory = "/downloads".to_string();
        config.upload_locations[0].label = "movies".to_string();

        store.save(&config).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::with_path(dir.path().join("nested").join("config.toml"));

        store.save(&ServerConfig::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_legacy_shape_synthesizes_location() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let legacy = r#"
            serverUrl = "https://seed.example.com"
            username = "alice"
            password = ""
            authEnabled = false
            defaultDirectory = "/downloads/tv"
            defaultLabel = "tv"
        "#;
        fs::write(store.path(), legacy).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.server_url, "https://seed.example.com");
        assert_eq!(config.upload_locations.len(), 1);
        let location = &config.upload_locations[0];
        assert_eq!(location.directory, "/downloads/tv");
        assert_eq!(location.label, "tv");
        assert!(location.is_active);
    }

    #[test]
    fn test_full_record_overwrite() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let mut first = ServerConfig::default();
        first.server_url = "https://one.example.com".to_string();
        first.upload_locations.push(UploadLocation::new("extra"));
        store.save(&first).unwrap();

        let mut second = ServerConfig::default();
        second.server_url = "https://two.example.com".to_string();
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.server_url, "https://two.example.com");
        assert_eq!(loaded.upload_locations.len(), 1);
    }
}
