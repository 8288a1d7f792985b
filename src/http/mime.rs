//! MIME type lookup
//!
//! Fixed extension table. Unrecognized extensions return `None` and the
//! Content-Type header is omitted from the response entirely, rather than
//! defaulting to a generic type.

/// Look up the Content-Type for a file extension.
///
/// # Examples
/// ```
/// use servedir::http::mime::content_type;
/// assert_eq!(content_type(Some("html")), Some("text/html"));
/// assert_eq!(content_type(Some("md")), Some("text/markdown"));
/// assert_eq!(content_type(Some("xyz")), None);
/// ```
#[must_use]
pub fn content_type(extension: Option<&str>) -> Option<&'static str> {
    match extension {
        Some("md") => Some("text/markdown"),
        Some("html" | "htm") => Some("text/html"),
        Some("json" | "map") => Some("application/json"),
        Some("txt") => Some("text/plain"),
        Some("js") => Some("application/javascript"),
        Some("css") => Some("text/css"),
        Some("gz") => Some("application/gzip"),
        Some("wasm") => Some("application/wasm"),
        Some("mp3") => Some("audio/mpeg"),
        Some("mp4") => Some("video/mp4"),
        _ => None,
    }
}
