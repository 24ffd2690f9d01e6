//! Upload location presets and the active-location selector

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A named upload destination on the ruTorrent server.
///
/// Field names serialize in camelCase so the persisted and exported shapes
/// match the browser extension's configuration format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadLocation {
    /// Opaque unique identifier (timestamp-derived)
    pub id: String,
    /// Server-side download directory; empty means the server default
    #[serde(default)]
    pub directory: String,
    /// Server-side category label; empty means none
    #[serde(default)]
    pub label: String,
    /// Whether this location is the active upload target
    #[serde(default)]
    pub is_active: bool,
}

impl UploadLocation {
    /// Create a new inactive location with empty directory and label.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            directory: String::new(),
            label: String::new(),
            is_active: false,
        }
    }

    /// Human-readable destination for notifications.
    pub fn destination(&self) -> String {
        if self.directory.is_empty() {
            "the server default directory".to_string()
        } else {
            self.directory.clone()
        }
    }
}

// Last issued id, kept strictly increasing so two locations created within
// the same millisecond still get distinct ids.
static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh opaque location id from the current time in milliseconds.
pub fn next_location_id() -> String {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now_ms.max(last + 1);
        match LAST_ID.compare_exchange(last, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate.to_string(),
            Err(observed) => last = observed,
        }
    }
}

/// Select the location that applies to an upload.
///
/// Returns the entry flagged active, falling back to the first entry if none
/// is flagged. An empty list yields `None` and is treated as a configuration
/// error upstream. Pure: never writes the fallback choice back.
pub fn active_location(locations: &[UploadLocation]) -> Option<&UploadLocation> {
    locations
        .iter()
        .find(|location| location.is_active)
        .or_else(|| locations.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, is_active: bool) -> UploadLocation {
        UploadLocation {
            id: id.to_string(),
            directory: String::new(),
            label: String::new(),
            is_active,
        }
    }

    #[test]
    fn test_selector_returns_active_entry() {
        let locations = vec![location("a", false), location("b", true), location("c", false)];
        assert_eq!(active_location(&locations).map(|l| l.id.as_str()), Some("b"));
    }

    #[test]
    fn test_selector_falls_back_to_first() {
        let locations = vec![location("a", false), location("b", false)];
        assert_eq!(active_location(&locations).map(|l| l.id.as_str()), Some("a"));
    }

    #[test]
    fn test_selector_empty_list() {
        assert!(active_location(&[]).is_none());
    }

    #[test]
    fn test_selector_is_pure() {
        let locations = vec![location("a", false), location("b", false)];
        let first = active_location(&locations).map(|l| l.id.clone());
        let second = active_location(&locations).map(|l| l.id.clone());
        assert_eq!(first, second);
        // The fallback is never persisted back into the list
        assert!(!locations[0].is_active);
    }

    #[test]
    fn test_next_location_id_is_unique() {
        let a = next_location_id();
        let b = next_location_id();
        let c = next_location_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_destination_for_empty_directory() {
        let mut loc = location("a", true);
        assert_eq!(loc.destination(), "the server default directory");
        loc.directory = "/downloads/movies".to_string();
        assert_eq!(loc.destination(), "/downloads/movies");
    }

    #[test]
    fn test_location_camel_case_shape() {
        let loc = UploadLocation {
            id: "1700000000000".to_string(),
            directory: "/d".to_string(),
            label: "movies".to_string(),
            is_active: true,
        };
        let json = serde_json::to_string(&loc).unwrap();
        assert!(json.contains("\"isActive\":true"));
        assert!(json.contains("\"directory\":\"/d\""));
    }
}
