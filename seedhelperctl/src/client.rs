//! HTTP client for the daemon's control API.
//!
//! The settings surface does not own network access to the ruTorrent
//! server; connection tests round-trip through the daemon as a
//! `TEST_CONNECTION` message, mirroring the extension's message passing.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use seedhelper_core::api::{ControlRequest, MessageResponse};
use seedhelper_core::config::ServerConfig;

/// Normalize a daemon URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Client for the local SeedHelper daemon.
#[derive(Debug, Clone)]
pub struct DaemonClient {
    http: Client,
    base_url: String,
}

impl DaemonClient {
    /// Create a new daemon client.
    ///
    /// # Arguments
    ///
    /// * `daemon_url` - Control URL of the daemon (e.g. "http://127.0.0.1:7070")
    /// * `timeout_secs` - Request timeout in seconds
    pub fn new(daemon_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("seedhelperctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: normalize_url(daemon_url),
        })
    }

    /// Ask the daemon to test a (possibly unsaved) server configuration.
    ///
    /// The outcome is carried in the response body; a transport failure here
    /// means the daemon itself is unreachable.
    pub async fn test_connection(&self, config: &ServerConfig) -> Result<MessageResponse> {
        let url = format!("{}/api/v0/message", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&ControlRequest::TestConnection {
                config: config.clone(),
            })
            .send()
            .await
            .with_context(|| format!("Cannot reach the SeedHelper daemon at {}", self.base_url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!("Daemon returned HTTP {}", status));
        }

        response
            .json()
            .await
            .context("Failed to parse daemon response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockDaemon;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("http://127.0.0.1:7070"), "http://127.0.0.1:7070");
        assert_eq!(normalize_url("http://127.0.0.1:7070/"), "http://127.0.0.1:7070");
        assert_eq!(normalize_url("http://127.0.0.1:7070///"), "http://127.0.0.1:7070");
    }

    #[tokio::test]
    async fn test_round_trip_success() {
        let (_daemon, url) = MockDaemon::start().await.unwrap();
        let client = DaemonClient::new(&url, 5).unwrap();

        let config = ServerConfig {
            server_url: "https://seed.example.com".to_string(),
            ..ServerConfig::default()
        };
        let response = client.test_connection(&config).await.unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Connection successful!");
    }

    #[tokio::test]
    async fn test_round_trip_missing_url() {
        let (_daemon, url) = MockDaemon::start().await.unwrap();
        let client = DaemonClient::new(&url, 5).unwrap();

        let response = client
            .test_connection(&ServerConfig::default())
            .await
            .unwrap();
        assert!(!response.success);
        assert_eq!(response.message, "Server URL is required");
    }

    #[tokio::test]
    async fn test_daemon_unreachable() {
        let client = DaemonClient::new("http://127.0.0.1:1", 2).unwrap();
        let err = client
            .test_connection(&ServerConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Cannot reach the SeedHelper daemon"));
    }
}
