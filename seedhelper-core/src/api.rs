//! Control-API models for the SeedHelper daemon
//!
//! Request and response shapes for the local HTTP API that the browser-side
//! collaborator talks to. Wire names are camelCase to match the extension.

use serde::{Deserialize, Serialize};

use crate::config::{ServerConfig, UploadLocation};

/// Default control URL the CLI uses to reach the daemon.
pub const DEFAULT_CONTROL_URL: &str = "http://127.0.0.1:7070";

/// Default port for the daemon control API.
pub const DEFAULT_CONTROL_PORT: u16 = 7070;

/// Messages accepted on the control endpoint.
///
/// The wire shape is `{ "type": "TEST_CONNECTION", "config": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlRequest {
    /// Verify reachability and credentials of a (possibly unsaved) config
    #[serde(rename = "TEST_CONNECTION")]
    TestConnection { config: ServerConfig },
}

/// Outcome envelope for control and link-upload requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Successful outcome with a message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Failed outcome with a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// A download-created event reported by the browser-side collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadEvent {
    /// Source URL of the download
    pub url: String,
    /// Declared MIME type, when the browser knows it
    #[serde(default)]
    pub mime: Option<String>,
}

/// Whether the browser should cancel the native download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptDecision {
    pub intercept: bool,
}

/// Context-menu "upload this link" request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkUploadRequest {
    /// Link target to fetch and upload
    pub url: String,
    /// Upload location chosen in the menu; default selection when absent
    #[serde(default)]
    pub location_id: Option<String>,
}

/// Events queued for the host UI to render: user notifications, transient
/// success banners, and location-list refresh triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum UiEvent {
    Notification {
        title: String,
        message: String,
    },
    Banner {
        filename: String,
        directory: String,
        label: String,
        dismiss_after_secs: u64,
    },
    /// The stored location list changed; menus listing locations must refresh
    LocationsChanged,
}

/// Location list for the context-menu collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<UploadLocation>,
}

/// Drained pending UI events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<UiEvent>,
}
