//! Narrow interfaces for the host-controlled side effects of an upload:
//! user notifications and the transient on-page success banner.
//!
//! Both are collaborators owned by the embedding process; the dispatcher
//! only ever calls through these traits. Banner rendering is best-effort:
//! implementations log failures and never return them.

use std::sync::Arc;

use tracing::{debug, info};

/// Notification title for successful operations.
pub const NOTIFY_TITLE: &str = "SeedHelper";

/// Notification title for failed operations.
pub const NOTIFY_ERROR_TITLE: &str = "SeedHelper Error";

/// Seconds after which the success banner dismisses itself.
pub const BANNER_DISMISS_SECS: u64 = 5;

/// Fields summarized in the on-page success banner.
#[derive(Debug, Clone)]
pub struct BannerFields {
    pub filename: String,
    pub directory: String,
    pub label: String,
}

/// Delivers user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str);
}

/// Renders the transient success banner into the host UI, best-effort.
pub trait BannerRenderer: Send + Sync {
    fn render(&self, fields: &BannerFields);
}

pub type SharedNotifier = Arc<dyn Notifier>;
pub type SharedBanner = Arc<dyn BannerRenderer>;

/// Notifier that only writes to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, message: &str) {
        info!("{}: {}", title, message);
    }
}

/// Banner renderer that only writes to the log.
#[derive(Debug, Default)]
pub struct LogBanner;

impl BannerRenderer for LogBanner {
    fn render(&self, fields: &BannerFields) {
        debug!(
            "Banner: {} (directory: {}, label: {})",
            fields.filename, fields.directory, fields.label
        );
    }
}
