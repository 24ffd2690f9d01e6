//! Pending UI events and the queue-backed notification collaborators
//!
//! The daemon cannot render anything itself; notifications, banners, and
//! location-list refresh triggers are queued here and drained by the
//! browser-side collaborator through `GET /api/v0/events`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tracing::warn;

use seedhelper_core::api::UiEvent;
use seedhelper_remote::notify::{BannerFields, BannerRenderer, Notifier, BANNER_DISMISS_SECS};

// The host UI may never poll; keep the backlog bounded.
const MAX_PENDING_EVENTS: usize = 64;

/// Bounded queue of events awaiting pickup by the host UI.
#[derive(Debug, Clone, Default)]
pub(crate) struct EventQueue {
    inner: Arc<Mutex<VecDeque<UiEvent>>>,
}

impl EventQueue {
    /// Append an event, dropping the oldest entry when full.
    ///
    /// Delivery is best-effort: a poisoned queue is logged, never propagated.
    pub fn push(&self, event: UiEvent) {
        match self.inner.lock() {
            Ok(mut queue) => {
                if queue.len() >= MAX_PENDING_EVENTS {
                    queue.pop_front();
                }
                queue.push_back(event);
            }
            Err(_) => warn!("Event queue poisoned; dropping event"),
        }
    }

    /// Remove and return all pending events in arrival order.
    pub fn drain(&self) -> Vec<UiEvent> {
        match self.inner.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => {
                warn!("Event queue poisoned; returning no events");
                Vec::new()
            }
        }
    }
}

/// Notifier that queues notifications for the host UI.
pub(crate) struct QueueNotifier(pub EventQueue);

impl Notifier for QueueNotifier {
    fn notify(&self, title: &str, message: &str) {
        self.0.push(UiEvent::Notification {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

/// Banner renderer that queues the banner payload for injection into the
/// active tab. Auto-dismisses host-side after five seconds.
pub(crate) struct QueueBanner(pub EventQueue);

impl BannerRenderer for QueueBanner {
    fn render(&self, fields: &BannerFields) {
        self.0.push(UiEvent::Banner {
            filename: fields.filename.clone(),
            directory: fields.directory.clone(),
            label: fields.label.clone(),
            dismiss_after_secs: BANNER_DISMISS_SECS,
        });
    }
}
