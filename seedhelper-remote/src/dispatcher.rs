//! The upload dispatch path: fetch the source file, resolve the effective
//! upload location, post the multipart form, and emit the success effects.

use std::sync::Arc;

use tracing::info;

use seedhelper_core::config::{active_location, ServerConfig, UploadLocation};
use seedhelper_core::torrent::torrent_file_name;

use crate::client::RutorrentClient;
use crate::error::UploadError;
use crate::notify::{
    BannerFields, LogBanner, LogNotifier, SharedBanner, SharedNotifier, NOTIFY_TITLE,
};

/// Result of a successful dispatch.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// Filename the torrent was uploaded under
    pub filename: String,
    /// Location the upload was routed to
    pub location: UploadLocation,
}

/// Orchestrates a single upload from a source URL to the configured server.
///
/// Holds the notification and banner collaborators; the caller supplies a
/// freshly loaded configuration on every invocation (no caching here).
pub struct Dispatcher {
    notifier: SharedNotifier,
    banner: SharedBanner,
}

impl Dispatcher {
    pub fn new(notifier: SharedNotifier, banner: SharedBanner) -> Self {
        Self { notifier, banner }
    }

    /// Dispatcher whose side effects only reach the log.
    pub fn with_logging() -> Self {
        Self::new(Arc::new(LogNotifier), Arc::new(LogBanner))
    }

    /// Fetch the file at `url` and upload it to the configured server.
    ///
    /// The context-menu path passes its resolved location as `explicit`;
    /// otherwise the active location is selected from the configuration.
    /// On success a notification names the file and destination and the
    /// banner is rendered best-effort. Failures are returned to the caller,
    /// which surfaces them; no retry happens at any level.
    pub async fn upload_from_url(
        &self,
        url: &str,
        config: &ServerConfig,
        explicit: Option<&UploadLocation>,
    ) -> Result<UploadOutcome, UploadError> {
        let location = match explicit {
            Some(location) => location.clone(),
            None => active_location(&config.upload_locations)
                .cloned()
                .ok_or(UploadError::NoLocation)?,
        };

        let filename = torrent_file_name(url);
        let client = RutorrentClient::new(config)?;

        let bytes = client.fetch_source(url).await?;
        client.upload(&filename, bytes, &location).await?;

        info!("Uploaded {} to {}", filename, location.destination());
        self.notifier.notify(
            NOTIFY_TITLE,
            &format!("{} uploaded to {}", filename, location.destination()),
        );

        // Banner rendering is best-effort; implementations log their own
        // failures and never block the success notification above.
        self.banner.render(&BannerFields {
            filename: filename.clone(),
            directory: location.directory.clone(),
            label: location.label.clone(),
        });

        Ok(UploadOutcome { filename, location })
    }
}
