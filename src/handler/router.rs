//! Request dispatch
//!
//! Entry point for request processing. Each request flows once through:
//! path resolution, stat, file or directory responder, and on any failure
//! the fallback error responder. CORS and access logging are applied to
//! the finished response.

use crate::config::AppState;
use crate::error::ServeError;
use crate::handler::{listing, resolve, static_files};
use crate::html;
use crate::http::body::ResponseBody;
use crate::http::{self, range};
use crate::logger::{self, AccessLogEntry};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling.
///
/// Method-agnostic: every method gets GET semantics, and the method only
/// shows up in the access log.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<ResponseBody>, Infallible> {
    let started = Instant::now();
    let method = req.method().to_string();
    let raw_path = req.uri().path().to_string();
    let normalized_path = resolve::normalize_url(&raw_path);
    let range_header = req
        .headers()
        .get("range")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let referer = req
        .headers()
        .get("referer")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let mut response = match dispatch(&state, &raw_path, range_header.as_deref()).await {
        Ok(response) => response,
        Err(err) => fallback(&err),
    };

    if state.config.http.enable_cors {
        http::apply_cors(&mut response);
    }

    if !state.config.logging.quiet {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.ip().to_string(),
            time: chrono::Local::now(),
            method,
            path: normalized_path,
            status: response.status().as_u16(),
            body_bytes: content_length_of(&response),
            referer,
            user_agent,
            request_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve, stat, and branch to the matching responder.
async fn dispatch(
    state: &AppState,
    raw_path: &str,
    range_header: Option<&str>,
) -> Result<Response<ResponseBody>, ServeError> {
    let resolved = resolve::resolve(&state.root, raw_path);
    let metadata = tokio::fs::metadata(&resolved).await?;

    if metadata.is_dir() {
        let dir_url = resolve::normalize_url(raw_path);
        listing::serve_dir(&resolved, &dir_url).await
    } else {
        let outcome = range::parse_range_header(range_header, metadata.len());
        static_files::serve_file(&resolved, outcome).await
    }
}

/// Convert a pipeline failure into an error page response. Never fails,
/// and never leaks raw error detail to the client.
fn fallback(err: &ServeError) -> Response<ResponseBody> {
    match err {
        ServeError::NotFound => http::build_error_response(
            404,
            html::render_error_page(
                "Not Found",
                "The requested resource was not found on this server.",
            ),
        ),
        ServeError::Io(io_err) => {
            logger::log_error(&format!("request failed: {io_err}"));
            http::build_error_response(
                500,
                html::render_error_page(
                    "Internal Server Error",
                    "The server encountered an internal error.",
                ),
            )
        }
    }
}

fn content_length_of(response: &Response<ResponseBody>) -> u64 {
    response
        .headers()
        .get("Content-Length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use tempfile::TempDir;

    fn state_for(root: &TempDir) -> AppState {
        let mut config = Config::load_from("no-such-config-file").unwrap();
        config.server.root = root.path().to_str().unwrap().to_string();
        AppState::new(config).unwrap()
    }

    async fn body_bytes(response: Response<ResponseBody>) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn test_dispatch_serves_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hello.txt"), b"hi there").unwrap();
        let state = state_for(&dir);

        let response = dispatch(&state, "/hello.txt", None).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(body_bytes(response).await, b"hi there");
    }

    #[tokio::test]
    async fn test_dispatch_serves_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.txt"), b"0123456789").unwrap();
        let state = state_for(&dir);

        let response = dispatch(&state, "/data.txt", Some("bytes=2-5"))
            .await
            .unwrap();
        assert_eq!(response.status(), 206);
        assert_eq!(body_bytes(response).await, b"2345");
    }

    #[tokio::test]
    async fn test_dispatch_serves_directory_listing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"a").unwrap();
        let state = state_for(&dir);

        let response = dispatch(&state, "/", None).await.unwrap();
        assert_eq!(response.status(), 200);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("a.txt"));
    }

    #[tokio::test]
    async fn test_dispatch_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(&dir);

        let err = dispatch(&state, "/absent.txt", None).await.unwrap_err();
        assert!(matches!(err, ServeError::NotFound));
    }

    #[tokio::test]
    async fn test_dispatch_traversal_stays_under_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("etc"), b"decoy").unwrap();
        let state = state_for(&dir);

        // The traversal collapses to /etc under the root, which is the
        // decoy file, not the system one.
        let response = dispatch(&state, "/../../etc", None).await.unwrap();
        assert_eq!(body_bytes(response).await, b"decoy");
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("f.txt"), b"stable").unwrap();
        let state = state_for(&dir);

        let first = dispatch(&state, "/f.txt", Some("bytes=1-3")).await.unwrap();
        let second = dispatch(&state, "/f.txt", Some("bytes=1-3")).await.unwrap();
        assert_eq!(first.status(), second.status());
        assert_eq!(body_bytes(first).await, body_bytes(second).await);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = fallback(&ServeError::NotFound);
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_not_found_body_names_the_status() {
        let response = fallback(&ServeError::NotFound);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8_lossy(&body).contains("Not Found"));
    }

    #[tokio::test]
    async fn test_io_error_maps_to_500() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt");
        let response = fallback(&ServeError::Io(io_err));
        assert_eq!(response.status(), 500);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("Internal Server Error"));
        // Raw error detail never reaches the client.
        assert!(!text.contains("corrupt"));
    }
}
