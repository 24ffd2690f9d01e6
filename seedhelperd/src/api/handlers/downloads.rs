//! Download interception
//!
//! The browser-side collaborator reports every new download here and cancels
//! the native download when the response says to intercept. The upload
//! itself runs in a detached task after the decision is returned; any
//! failure inside it is caught and surfaced as a notification so this
//! listener survives every invocation.

use axum::{extract::State, Json};
use tracing::{debug, error, info};

use seedhelper_core::api::{DownloadEvent, InterceptDecision};
use seedhelper_core::torrent::is_torrent_download;
use seedhelper_remote::notify::NOTIFY_ERROR_TITLE;

use crate::api::AppState;

/// Handle a download-created event.
///
/// # Endpoint
///
/// `POST /api/v0/downloads` with `{ "url": ..., "mime": ... }`, answering
/// `{ "intercept": bool }`.
pub(crate) async fn download_created(
    State(state): State<AppState>,
    Json(event): Json<DownloadEvent>,
) -> Json<InterceptDecision> {
    debug!("Request: POST /api/v0/downloads ({})", event.url);

    if !is_torrent_download(&event.url, event.mime.as_deref()) {
        return Json(InterceptDecision { intercept: false });
    }

    info!("Torrent download detected: {}", event.url);
    tokio::spawn(async move {
        forward_download(state, event.url).await;
    });

    Json(InterceptDecision { intercept: true })
}

/// Runs after the intercept decision was returned; every error ends up as a
/// user notification, nothing propagates.
async fn forward_download(state: AppState, url: String) {
    let config = match state.store.load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            state
                .notifier
                .notify(NOTIFY_ERROR_TITLE, "Failed to load SeedHelper configuration");
            return;
        }
    };

    if !config.has_server_url() {
        error!("ruTorrent configuration not found");
        state.notifier.notify(
            NOTIFY_ERROR_TITLE,
            "ruTorrent server configuration not found. Please configure it first.",
        );
        return;
    }

    match state.dispatcher.upload_from_url(&url, &config, None).await {
        Ok(outcome) => info!("Torrent uploaded successfully: {}", outcome.filename),
        Err(e) => {
            error!("Error uploading torrent to ruTorrent: {e}");
            state
                .notifier
                .notify(NOTIFY_ERROR_TITLE, &format!("Failed to upload torrent: {e}"));
        }
    }
}
