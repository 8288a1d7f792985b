//! Directory listings
//!
//! Enumerates the direct children of a resolved directory and renders them
//! as an HTML listing, unless the directory carries an `index.html`, in
//! which case that file is served instead.

use crate::error::ServeError;
use crate::handler::static_files;
use crate::html;
use crate::http::body::ResponseBody;
use crate::http::range::RangeOutcome;
use crate::http::response;
use hyper::Response;
use std::path::Path;

/// A single entry in a directory listing. Built fresh per request, never
/// cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// File or folder name as enumerated.
    pub name: String,
    /// Root-relative URL for the entry's link.
    pub url: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

/// Serve a resolved directory path.
///
/// `dir_url` is the normalized root-relative URL of the directory; a
/// trailing slash is guaranteed before links are built from it.
pub async fn serve_dir(path: &Path, dir_url: &str) -> Result<Response<ResponseBody>, ServeError> {
    let dir_url = with_trailing_slash(dir_url);
    let mut entries = Vec::new();

    let mut read_dir = tokio::fs::read_dir(path).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();

        // An index.html child takes over the whole response; the listing
        // is never rendered in that case.
        if name == "index.html" {
            if let Ok(metadata) = tokio::fs::metadata(entry.path()).await {
                if metadata.is_file() {
                    return static_files::serve_file(&entry.path(), RangeOutcome::NoRange).await;
                }
            }
        }

        // Kind is best-effort: a broken symlink still gets listed as a
        // plain file entry.
        let kind = match entry.file_type().await {
            Ok(file_type) if file_type.is_dir() => EntryKind::Folder,
            _ => EntryKind::File,
        };

        let url = match kind {
            EntryKind::Folder => format!("{dir_url}{name}/"),
            EntryKind::File => format!("{dir_url}{name}"),
        };
        entries.push(EntryInfo { name, url, kind });
    }

    sort_entries(&mut entries);
    Ok(response::build_html_response(html::render_listing(
        &dir_url, &entries,
    )))
}

/// Case-insensitive ascending sort by entry name.
pub fn sort_entries(entries: &mut [EntryInfo]) {
    entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use tempfile::tempdir;

    async fn body_string(response: Response<ResponseBody>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn entry(name: &str) -> EntryInfo {
        EntryInfo {
            name: name.to_string(),
            url: format!("/{name}"),
            kind: EntryKind::File,
        }
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut entries = vec![entry("B.txt"), entry("a.txt"), entry("C")];
        sort_entries(&mut entries);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "B.txt", "C"]);
    }

    #[tokio::test]
    async fn test_listing_contains_sorted_links() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("B.txt"), b"b").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"a").unwrap();
        std::fs::create_dir(dir.path().join("C")).unwrap();

        let response = serve_dir(dir.path(), "/files").await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Type").unwrap(), "text/html");

        let html = body_string(response).await;
        assert!(html.contains("/files/a.txt"));
        assert!(html.contains("/files/B.txt"));
        assert!(html.contains("/files/C/"));

        let a = html.find("a.txt").unwrap();
        let b = html.find("B.txt").unwrap();
        let c = html.find(">C<").unwrap();
        assert!(a < b && b < c, "expected a.txt before B.txt before C");
    }

    #[tokio::test]
    async fn test_index_html_takes_precedence() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), b"<h1>home</h1>").unwrap();
        std::fs::write(dir.path().join("other.txt"), b"other").unwrap();

        let response = serve_dir(dir.path(), "/").await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Type").unwrap(), "text/html");
        assert_eq!(body_string(response).await, "<h1>home</h1>");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_broken_symlink_is_still_listed() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ok.txt"), b"fine").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

        let response = serve_dir(dir.path(), "/").await.unwrap();
        let html = body_string(response).await;
        assert!(html.contains("dangling"));
        assert!(html.contains("ok.txt"));
    }

    #[tokio::test]
    async fn test_missing_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let err = serve_dir(&dir.path().join("absent"), "/absent")
            .await
            .unwrap_err();
        assert!(matches!(err, ServeError::NotFound));
    }
}
