//! SeedHelper Daemon
//!
//! Owns all network access for the SeedHelper system: receives download
//! events from the browser-side collaborator over a local control API,
//! decides which downloads to intercept, and uploads intercepted torrent
//! files to the configured ruTorrent server. Configuration is read fresh
//! from the store on every event; a file watcher turns store changes into
//! refresh events for the host UI.

mod api;
mod events;
mod watch;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use api::AppState;
use clap::Parser;
use tokio::signal;
use tracing::info;

use seedhelper_core::api::DEFAULT_CONTROL_PORT;
use seedhelper_core::config::{default_config_path, ConfigStore};
use seedhelper_remote::{Dispatcher, SharedNotifier};

use events::{EventQueue, QueueBanner, QueueNotifier};

/// SeedHelper control daemon
#[derive(Parser, Debug)]
#[command(name = "seedhelperd")]
#[command(version, about = "SeedHelper interception daemon", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Control API bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Control API port
    #[arg(short, long, default_value_t = DEFAULT_CONTROL_PORT)]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(args.verbose);

    info!("SeedHelper daemon starting...");

    // Determine config path: CLI flag > env var > default
    let config_path = args.config.unwrap_or_else(|| {
        std::env::var("SEEDHELPER_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path())
    });
    info!("Configuration file: {}", config_path.display());

    let store = Arc::new(ConfigStore::with_path(config_path));
    match store.load() {
        Ok(config) if config.has_server_url() => {
            info!(
                "Server configured: {} ({} upload location(s))",
                config.server_url,
                config.upload_locations.len()
            );
        }
        Ok(_) => info!("No server configured yet; uploads will be refused until one is set"),
        Err(e) => info!("Configuration unreadable ({e}); continuing with defaults on each read"),
    }

    let queue = EventQueue::default();
    let notifier: SharedNotifier = Arc::new(QueueNotifier(queue.clone()));
    let dispatcher = Dispatcher::new(notifier.clone(), Arc::new(QueueBanner(queue.clone())));

    watch::spawn_config_watcher(store.clone(), queue.clone());

    let state = AppState::new(store, dispatcher, notifier, queue);
    let app = api::create_router(state);

    let bind_addr = format!("{}:{}", args.bind, args.port);
    info!("Starting control API on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("SeedHelper daemon listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Daemon shutdown complete");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

/// Initialize tracing subscriber for logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
