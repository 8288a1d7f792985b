//! Request path resolution
//!
//! Maps a raw request path to an absolute filesystem path under the
//! configured root. Resolution is purely lexical: no filesystem access,
//! and the result can never land outside the root. Malformed input never
//! fails a request; it degrades to the root itself.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a URL path.
///
/// Collapses `.` and empty segments, resolves `..` without ever climbing
/// above the URL root, and always returns a path starting with `/`.
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    let mut normalized = String::from("/");
    normalized.push_str(&segments.join("/"));
    normalized
}

/// Resolve a raw request path to an absolute path under `root`.
///
/// The path is normalized, percent-decoded (a malformed escape keeps the
/// pre-decode value rather than failing the request), and joined component
/// by component so that absolute markers or `..` sequences surviving the
/// decode still cannot escape the root.
#[must_use]
pub fn resolve(root: &Path, raw_path: &str) -> PathBuf {
    let normalized = normalize_url(raw_path);
    let decoded = match percent_decode_str(&normalized).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => normalized,
    };

    let mut resolved = root.to_path_buf();
    for component in Path::new(&decoded).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::ParentDir => {
                // A decoded ".." may only walk back down to the root.
                if resolved != root {
                    resolved.pop();
                }
            }
            // RootDir, CurDir, and prefixes cannot redirect the join.
            _ => {}
        }
    }
    resolved
}
