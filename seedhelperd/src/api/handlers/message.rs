//! The message endpoint for settings-surface round trips

use axum::Json;
use tracing::debug;

use seedhelper_core::api::{ControlRequest, MessageResponse};
use seedhelper_remote::probe;

/// Handle a control message.
///
/// Currently the only message is `TEST_CONNECTION`, which probes the server
/// named in the submitted (possibly unsaved) configuration. The response is
/// always HTTP 200 with the outcome in `success`.
///
/// # Endpoint
///
/// `POST /api/v0/message` with `{ "type": "TEST_CONNECTION", "config": ... }`
pub(crate) async fn handle_message(Json(request): Json<ControlRequest>) -> Json<MessageResponse> {
    match request {
        ControlRequest::TestConnection { config } => {
            debug!("Request: POST /api/v0/message (TEST_CONNECTION)");
            match probe(&config).await {
                Ok(message) => Json(MessageResponse::ok(message)),
                Err(e) => Json(MessageResponse::fail(e.to_string())),
            }
        }
    }
}
