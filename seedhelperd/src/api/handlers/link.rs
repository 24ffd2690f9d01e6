//! Context-menu link uploads
//!
//! No download exists on this path, so nothing is cancelled; the link target
//! is fetched directly and routed through the same dispatch path, optionally
//! to a location picked in the menu.

use axum::{extract::State, Json};
use tracing::{debug, error};

use seedhelper_core::api::{LinkUploadRequest, MessageResponse};
use seedhelper_remote::notify::NOTIFY_ERROR_TITLE;

use crate::api::AppState;

/// Handle an "upload this link" request.
///
/// # Endpoint
///
/// `POST /api/v0/link` with `{ "url": ..., "locationId": ... }`, answering
/// `{ "success": bool, "message": ... }`.
pub(crate) async fn upload_link(
    State(state): State<AppState>,
    Json(request): Json<LinkUploadRequest>,
) -> Json<MessageResponse> {
    debug!("Request: POST /api/v0/link ({})", request.url);

    let config = match state.store.load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            return Json(MessageResponse::fail(format!(
                "Failed to load configuration: {e}"
            )));
        }
    };

    if !config.has_server_url() {
        let message = "ruTorrent server configuration not found. Please configure it first.";
        state.notifier.notify(NOTIFY_ERROR_TITLE, message);
        return Json(MessageResponse::fail(message));
    }

    // Resolve the menu's location by id; the menu may be stale against the
    // stored list.
    let location = match &request.location_id {
        Some(id) => match config.location_by_id(id) {
            Some(location) => Some(location.clone()),
            None => {
                let message = "The selected upload location no longer exists";
                state.notifier.notify(NOTIFY_ERROR_TITLE, message);
                return Json(MessageResponse::fail(message));
            }
        },
        None => None,
    };

    match state
        .dispatcher
        .upload_from_url(&request.url, &config, location.as_ref())
        .await
    {
        Ok(outcome) => Json(MessageResponse::ok(format!(
            "{} uploaded to {}",
            outcome.filename,
            outcome.location.destination()
        ))),
        Err(e) => {
            error!("Error uploading link target: {e}");
            state
                .notifier
                .notify(NOTIFY_ERROR_TITLE, &format!("Failed to upload torrent: {e}"));
            Json(MessageResponse::fail(e.to_string()))
        }
    }
}
