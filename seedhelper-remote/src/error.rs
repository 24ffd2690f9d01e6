//! Error types for upload and probe operations
//!
//! All of these are terminal for the single operation in which they occur;
//! nothing here triggers automatic retry or backoff.

use thiserror::Error;

/// Errors from the upload dispatch path
#[derive(Error, Debug)]
pub enum UploadError {
    /// The source torrent file could not be retrieved
    #[error("Failed to fetch torrent file: {0}")]
    FetchFailed(String),

    /// Transport-level failure reaching the ruTorrent server
    #[error("Could not reach the ruTorrent server: {0}")]
    NetworkFailed(String),

    /// The server answered with a non-2xx status
    #[error("Upload failed with status: {0}")]
    ServerRejected(u16),

    /// The configuration holds no upload location at all
    #[error("No upload location is configured")]
    NoLocation,
}

/// Errors from the connection prober
#[derive(Error, Debug)]
pub enum ProbeError {
    /// No server URL configured
    #[error("Server URL is required")]
    MissingUrl,

    /// The server answered with a non-2xx status
    #[error("Connection failed with status: {0}")]
    BadStatus(u16),

    /// Transport-level failure
    #[error("Connection failed: {0}")]
    NetworkFailed(String),
}
