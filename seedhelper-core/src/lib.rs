//! SeedHelper Core Library
//!
//! Shared types, configuration handling, and torrent detection for the
//! SeedHelper project. This crate is used by both the daemon and CLI
//! components.

pub mod api;
pub mod config;
pub mod error;
pub mod torrent;

// Re-export commonly used types
pub use config::{
    active_location, default_config_path, import_json, next_location_id, normalize, ConfigStore,
    RawServerConfig, ServerConfig, UploadLocation, EXPORT_FILE_NAME,
};
pub use error::*;
pub use torrent::*;
