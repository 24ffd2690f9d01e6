//! Root endpoint, location listing, and the pending event queue

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::debug;

use seedhelper_core::api::{EventsResponse, LocationsResponse};

use crate::api::error::ApiError;
use crate::api::AppState;

/// Handle the root endpoint.
///
/// Basic service identification, useful to verify the daemon is reachable.
///
/// # Endpoint
///
/// `GET /`
pub(crate) async fn root() -> Json<Value> {
    debug!("Request: GET /");

    Json(json!({
        "service": "SeedHelper daemon",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok"
    }))
}

/// List the configured upload locations.
///
/// The context-menu collaborator builds its entries from this list and
/// re-fetches it whenever a locations-changed event arrives.
///
/// # Endpoint
///
/// `GET /api/v0/locations`
pub(crate) async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<LocationsResponse>, ApiError> {
    debug!("Request: GET /api/v0/locations");

    let config = state
        .store
        .load()
        .map_err(|e| ApiError::internal_error(format!("Failed to load configuration: {e}")))?;

    Ok(Json(LocationsResponse {
        locations: config.upload_locations,
    }))
}

/// Drain pending UI events (notifications, banners, refresh triggers).
///
/// # Endpoint
///
/// `GET /api/v0/events`
pub(crate) async fn drain_events(State(state): State<AppState>) -> Json<EventsResponse> {
    debug!("Request: GET /api/v0/events");

    Json(EventsResponse {
        events: state.events.drain(),
    })
}
