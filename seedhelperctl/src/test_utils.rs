//! Test utilities for CLI testing
//!
//! Provides a mock daemon control endpoint for round-trip tests.

use anyhow::Result;
use axum::{routing::post, Json, Router};
use tokio::net::TcpListener;

use seedhelper_core::api::{ControlRequest, MessageResponse};

/// Mock daemon answering the message endpoint the way seedhelperd would.
#[derive(Debug)]
pub struct MockDaemon {
    port: u16,
}

impl MockDaemon {
    /// Start the mock daemon and return it with its control URL.
    pub async fn start() -> Result<(Self, String)> {
        let app = Router::new().route("/api/v0/message", post(handle_message));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let url = format!("http://{}", addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock daemon error: {}", e);
            }
        });

        Ok((Self { port: addr.port() }, url))
    }

    /// Get the mock daemon port
    pub fn port(&self) -> u16 {
        self.port
    }
}

async fn handle_message(Json(request): Json<ControlRequest>) -> Json<MessageResponse> {
    match request {
        ControlRequest::TestConnection { config } => {
            if config.has_server_url() {
                Json(MessageResponse::ok("Connection successful!"))
            } else {
                Json(MessageResponse::fail("Server URL is required"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_daemon_startup() {
        let (daemon, url) = MockDaemon::start().await.unwrap();
        assert!(daemon.port() > 0);
        assert!(url.contains(&daemon.port().to_string()));
    }
}
