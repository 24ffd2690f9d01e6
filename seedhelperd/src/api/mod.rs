//! Control API for the SeedHelper daemon
//!
//! Local HTTP surface the browser-side collaborator talks to: download
//! interception, link uploads, connection tests, the location list, and the
//! pending UI event queue.

pub(crate) mod handlers;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use seedhelper_core::config::ConfigStore;
use seedhelper_remote::{Dispatcher, SharedNotifier};

use crate::events::EventQueue;

/// Application state shared across all handlers
#[derive(Clone)]
pub(crate) struct AppState {
    /// Configuration repository; read fresh on every event, never cached
    pub store: Arc<ConfigStore>,
    /// Upload dispatch path with the queue-backed collaborators wired in
    pub dispatcher: Arc<Dispatcher>,
    /// Notifier for trigger-level errors (same sink the dispatcher uses)
    pub notifier: SharedNotifier,
    /// Pending UI events drained by the host
    pub events: EventQueue,
}

impl AppState {
    pub fn new(
        store: Arc<ConfigStore>,
        dispatcher: Dispatcher,
        notifier: SharedNotifier,
        events: EventQueue,
    ) -> Self {
        Self {
            store,
            dispatcher: Arc::new(dispatcher),
            notifier,
            events,
        }
    }
}

/// Create the control API router with all endpoints
pub(crate) fn create_router(state: AppState) -> Router {
    info!("Setting up control API router...");

    let cors = CorsLayer::new()
        .allow_origin("*".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(tower_http::cors::Any);

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(64 * 1024));

    Router::new()
        .route("/api/v0/downloads", post(handlers::downloads::download_created))
        .route("/api/v0/link", post(handlers::link::upload_link))
        .route("/api/v0/message", post(handlers::message::handle_message))
        .route("/api/v0/locations", get(handlers::info::list_locations))
        .route("/api/v0/events", get(handlers::info::drain_events))
        .route("/", get(handlers::info::root))
        .layer(middleware_stack)
        .with_state(state)
}

/// Error handling utilities
pub(crate) mod error {
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    };
    use tracing::error;

    use seedhelper_core::api::MessageResponse;

    /// Custom error type for API responses
    #[derive(Debug)]
    pub struct ApiError {
        pub status_code: StatusCode,
        pub message: String,
    }

    impl ApiError {
        pub fn internal_error(message: impl Into<String>) -> Self {
            Self {
                status_code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.into(),
            }
        }
    }

    impl IntoResponse for ApiError {
        fn into_response(self) -> Response {
            error!("API Error {}: {}", self.status_code, self.message);
            (self.status_code, Json(MessageResponse::fail(self.message))).into_response()
        }
    }
}
