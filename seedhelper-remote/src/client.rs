//! HTTP client for a ruTorrent installation.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::AUTHORIZATION;
use reqwest::{multipart, Client};
use tracing::debug;

use seedhelper_core::config::{ServerConfig, UploadLocation};

use crate::error::{ProbeError, UploadError};

/// Upload endpoint relative to the ruTorrent base URL.
pub const ADD_TORRENT_ENDPOINT: &str = "php/addtorrent.php";

/// Settings endpoint used to verify reachability and credentials.
pub const GET_SETTINGS_ENDPOINT: &str = "php/getsettings.php";

const UPLOAD_TIMEOUT_SECS: u64 = 60;
const PROBE_TIMEOUT_SECS: u64 = 10;

/// Normalize a server URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Build the Basic auth header value for a configuration.
///
/// Present if and only if auth is enabled and both username and password are
/// non-empty; the value is the base64 encoding of `username:password`.
pub fn basic_auth_header(config: &ServerConfig) -> Option<String> {
    if config.auth_enabled && !config.username.is_empty() && !config.password.is_empty() {
        let credentials = format!("{}:{}", config.username, config.password);
        Some(format!("Basic {}", STANDARD.encode(credentials)))
    } else {
        None
    }
}

/// HTTP client bound to one ruTorrent installation.
///
/// Each request is sent exactly once; failed operations are reported to the
/// user and never retried.
#[derive(Debug, Clone)]
pub struct RutorrentClient {
    http: Client,
    base_url: String,
    auth_header: Option<String>,
}

impl RutorrentClient {
    /// Create a client from a server configuration.
    pub fn new(config: &ServerConfig) -> Result<Self, UploadError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .user_agent(concat!("seedhelper/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UploadError::NetworkFailed(e.to_string()))?;

        Ok(Self {
            http,
            base_url: normalize_url(&config.server_url),
            auth_header: basic_auth_header(config),
        })
    }

    /// Fetch the byte content of the source torrent file.
    ///
    /// The URL may be the original download URL or a context-menu link
    /// target; either way a failure here is a fetch failure, not an upload
    /// failure.
    pub async fn fetch_source(&self, url: &str) -> Result<Vec<u8>, UploadError> {
        debug!("Fetching torrent file from {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| UploadError::FetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::FetchFailed(format!(
                "source returned status {}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UploadError::FetchFailed(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Upload a torrent file to the configured server.
    ///
    /// Builds a multipart form with a `torrent_file` part carrying the given
    /// filename; `dir_edit` and `label` parts are included only when the
    /// location's directory and label are non-empty.
    pub async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        location: &UploadLocation,
    ) -> Result<(), UploadError> {
        let mut form = multipart::Form::new().part(
            "torrent_file",
            multipart::Part::bytes(bytes).file_name(filename.to_string()),
        );
        if !location.directory.is_empty() {
            form = form.text("dir_edit", location.directory.clone());
        }
        if !location.label.is_empty() {
            form = form.text("label", location.label.clone());
        }

        let url = format!("{}/{}", self.base_url, ADD_TORRENT_ENDPOINT);
        debug!("Uploading {} to {}", filename, url);

        let mut request = self.http.post(&url).multipart(form);
        if let Some(header) = &self.auth_header {
            request = request.header(AUTHORIZATION, header.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::NetworkFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::ServerRejected(status.as_u16()));
        }
        Ok(())
    }
}

/// Verify reachability and credentials of a ruTorrent installation.
///
/// Issues an authenticated GET against the settings endpoint, independent of
/// any file transfer. Returns the literal success message shown to the user.
pub async fn probe(config: &ServerConfig) -> Result<&'static str, ProbeError> {
    if !config.has_server_url() {
        return Err(ProbeError::MissingUrl);
    }

    let http = Client::builder()
        .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
        .user_agent(concat!("seedhelper/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ProbeError::NetworkFailed(e.to_string()))?;

    let url = format!(
        "{}/{}",
        normalize_url(&config.server_url),
        GET_SETTINGS_ENDPOINT
    );
    debug!("Testing connection to {}", url);

    let mut request = http.get(&url);
    if let Some(header) = basic_auth_header(config) {
        request = request.header(AUTHORIZATION, header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ProbeError::NetworkFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::BadStatus(status.as_u16()));
    }

    Ok("Connection successful!")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(auth_enabled: bool, username: &str, password: &str) -> ServerConfig {
        ServerConfig {
            server_url: "https://seed.example.com/rutorrent".to_string(),
            username: username.to_string(),
            password: password.to_string(),
            auth_enabled,
            ..ServerConfig::default()
        }
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(
            normalize_url("https://seed.example.com/rutorrent"),
            "https://seed.example.com/rutorrent"
        );
        assert_eq!(
            normalize_url("https://seed.example.com/rutorrent/"),
            "https://seed.example.com/rutorrent"
        );
        assert_eq!(
            normalize_url("https://seed.example.com/rutorrent///"),
            "https://seed.example.com/rutorrent"
        );
    }

    #[test]
    fn test_auth_header_requires_all_fields() {
        assert!(basic_auth_header(&config(false, "alice", "pw")).is_none());
        assert!(basic_auth_header(&config(true, "", "pw")).is_none());
        assert!(basic_auth_header(&config(true, "alice", "")).is_none());
        assert!(basic_auth_header(&config(true, "alice", "pw")).is_some());
    }

    #[test]
    fn test_auth_header_decodes_to_credentials() {
        let header = basic_auth_header(&config(true, "alice", "s3cret")).unwrap();
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"alice:s3cret");
    }

    #[tokio::test]
    async fn test_probe_requires_server_url() {
        let mut cfg = ServerConfig::default();
        cfg.server_url = "   ".to_string();

        let err = probe(&cfg).await.unwrap_err();
        assert!(matches!(err, ProbeError::MissingUrl));
    }
}
