//! Configuration types for SeedHelper
//!
//! This module provides the persisted configuration model shared by the
//! daemon (seedhelperd) and the CLI (seedhelperctl).
//!
//! # Architecture
//!
//! - [`ServerConfig`] - the single persisted record: server connection
//!   details, auth credentials, and the upload location list
//! - [`UploadLocation`] - a named destination preset (directory + label)
//! - [`ConfigStore`] - the sole owner of persisted state, with whole-record
//!   `load`/`save` operations
//!
//! Every consumer reads a fresh copy through the store and writes back the
//! full record on mutation. Legacy configurations carrying flat
//! `defaultDirectory`/`defaultLabel` fields are upgraded on read by
//! [`normalize`], which is the only place that migration exists.

mod locations;
mod paths;
mod portable;
mod server;
mod store;

pub use locations::{active_location, next_location_id, UploadLocation};
pub use paths::default_config_path;
pub use portable::{export_json, import_json, EXPORT_FILE_NAME};
pub use server::{normalize, validate_server_url, RawServerConfig, ServerConfig};
pub use store::ConfigStore;
