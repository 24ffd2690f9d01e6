//! Configuration change notification
//!
//! Watches the configuration file and pushes a locations-changed event
//! whenever the store is written, so host-side menus listing upload
//! locations refresh without polling.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use tokio::sync::mpsc;
use tracing::{info, warn};

use seedhelper_core::api::UiEvent;
use seedhelper_core::config::ConfigStore;

use crate::events::EventQueue;

const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

/// Spawn the config-file watch task.
pub(crate) fn spawn_config_watcher(store: Arc<ConfigStore>, events: EventQueue) {
    tokio::spawn(async move {
        if let Err(e) = run_config_watcher(store, events).await {
            warn!("Configuration watcher stopped: {e}");
        }
    });
}

async fn run_config_watcher(store: Arc<ConfigStore>, events: EventQueue) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(10);
    let handler = move |result: DebounceEventResult| {
        // Receiver gone means the daemon is shutting down
        let _ = tx.blocking_send(result);
    };
    let mut debouncer =
        new_debouncer(DEBOUNCE_INTERVAL, None, handler).context("Failed to create file watcher")?;

    // Watch the parent directory so the first save is seen even when the
    // file does not exist yet.
    let watch_dir = store
        .path()
        .parent()
        .context("Configuration path has no parent directory")?
        .to_path_buf();
    std::fs::create_dir_all(&watch_dir)
        .with_context(|| format!("Failed to create {}", watch_dir.display()))?;
    debouncer
        .watcher()
        .watch(&watch_dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", watch_dir.display()))?;

    info!("Watching configuration at {}", store.path().display());

    // Compare by file name: some platforms report canonicalized paths that
    // differ from the configured one.
    let file_name = store.path().file_name().map(|name| name.to_os_string());

    while let Some(result) = rx.recv().await {
        let Ok(batch) = result else { continue };
        let touched = batch.iter().any(|event| {
            event
                .paths
                .iter()
                .any(|path| path.file_name().map(|name| name.to_os_string()) == file_name)
        });
        if !touched {
            continue;
        }

        match store.load() {
            Ok(config) => {
                info!(
                    locations = config.upload_locations.len(),
                    "Configuration changed on disk"
                );
                events.push(UiEvent::LocationsChanged);
            }
            Err(e) => warn!("Failed to reload configuration after change: {e}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedhelper_core::config::ServerConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_store_write_produces_locations_changed_event() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(ConfigStore::with_path(dir.path().join("config.toml")));
        let queue = EventQueue::default();

        spawn_config_watcher(store.clone(), queue.clone());
        // Give the watcher time to register before writing
        tokio::time::sleep(Duration::from_millis(300)).await;

        store.save(&ServerConfig::default()).unwrap();

        // Debounced delivery takes a moment
        for _ in 0..100 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let events = queue.drain();
            if events
                .iter()
                .any(|event| matches!(event, UiEvent::LocationsChanged))
            {
                return;
            }
        }
        panic!("No locations-changed event after configuration write");
    }
}
