//! SeedHelper Remote Library
//!
//! HTTP driver for a ruTorrent server: the upload dispatcher, the connection
//! prober, and the narrow collaborator interfaces (notifications and the
//! on-page success banner) exercised on the dispatcher's result paths.
//! Used by both the daemon and the CLI.

pub mod client;
pub mod dispatcher;
pub mod error;
pub mod notify;

pub use client::{basic_auth_header, probe, RutorrentClient};
pub use dispatcher::{Dispatcher, UploadOutcome};
pub use error::{ProbeError, UploadError};
pub use notify::{
    BannerFields, BannerRenderer, LogBanner, LogNotifier, Notifier, SharedBanner, SharedNotifier,
};
