//! Torrent download recognition and filename derivation

/// MIME type declared by servers for torrent files
pub const TORRENT_MIME: &str = "application/x-bittorrent";

/// File extension for torrent files
pub const TORRENT_EXTENSION: &str = ".torrent";

/// Strip the query string (if any) from a URL.
fn without_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Decide whether a download is a torrent file.
///
/// A download matches when its URL path ends with `.torrent` (a trailing
/// query string is ignored) or its declared MIME type is
/// `application/x-bittorrent`.
pub fn is_torrent_download(url: &str, mime: Option<&str>) -> bool {
    if mime.is_some_and(|m| m == TORRENT_MIME) {
        return true;
    }
    without_query(url).ends_with(TORRENT_EXTENSION)
}

/// Derive the upload filename from a download URL.
///
/// Takes the final path segment, strips any query string, and appends the
/// `.torrent` extension if absent. Applying this to an already-correct name
/// changes nothing.
pub fn torrent_file_name(url: &str) -> String {
    let path = without_query(url);
    let name = path.rsplit('/').next().unwrap_or(path);

    if name.ends_with(TORRENT_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{TORRENT_EXTENSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_torrent_extension() {
        assert!(is_torrent_download("https://x/y/file.torrent", None));
        assert!(is_torrent_download("https://x/y/file.torrent?key=1", None));
        assert!(!is_torrent_download("https://x/y/file.zip", None));
    }

    #[test]
    fn test_detects_torrent_mime() {
        assert!(is_torrent_download(
            "https://x/download?id=42",
            Some("application/x-bittorrent")
        ));
        assert!(!is_torrent_download(
            "https://x/download?id=42",
            Some("application/octet-stream")
        ));
        assert!(!is_torrent_download("https://x/download?id=42", None));
    }

    #[test]
    fn test_file_name_strips_query() {
        assert_eq!(
            torrent_file_name("https://x/y/file.torrent?x=1"),
            "file.torrent"
        );
    }

    #[test]
    fn test_file_name_appends_extension() {
        assert_eq!(torrent_file_name("https://x/y/file"), "file.torrent");
    }

    #[test]
    fn test_file_name_is_idempotent() {
        let first = torrent_file_name("https://x/y/file.torrent");
        assert_eq!(first, "file.torrent");
        // A derived name passed back through derivation is unchanged
        assert_eq!(torrent_file_name(&first), first);
    }

    #[test]
    fn test_file_name_query_inside_last_segment() {
        assert_eq!(
            torrent_file_name("https://x/download.php?file=abc"),
            "download.php.torrent"
        );
    }
}
