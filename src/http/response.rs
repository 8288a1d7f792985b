//! HTTP response building
//!
//! Builders for the fixed set of responses the server produces, decoupled
//! from handler logic, plus the CORS post-processing step.

use crate::http::body::{self, ResponseBody};
use crate::logger;
use hyper::header::HeaderValue;
use hyper::Response;

/// Build a 200 response carrying rendered HTML.
pub fn build_html_response(content: String) -> Response<ResponseBody> {
    let content_length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html")
        .header("Content-Length", content_length)
        .body(body::full(content))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(body::empty())
        })
}

/// Build an error response (404/500) carrying a rendered error page.
pub fn build_error_response(status: u16, content: String) -> Response<ResponseBody> {
    let content_length = content.len();
    Response::builder()
        .status(status)
        .header("Content-Type", "text/html")
        .header("Content-Length", content_length)
        .body(body::full(content))
        .unwrap_or_else(|e| {
            log_build_error("error", &e);
            Response::new(body::empty())
        })
}

/// Build a 416 Range Not Satisfiable response.
pub fn build_416_response(entity_size: u64) -> Response<ResponseBody> {
    Response::builder()
        .status(416)
        .header("Content-Range", format!("bytes */{entity_size}"))
        .body(body::empty())
        .unwrap_or_else(|e| {
            log_build_error("416", &e);
            Response::new(body::empty())
        })
}

/// Append the fixed CORS headers to a finished response.
///
/// Pure header append: idempotent in effect, never fails, and the only
/// mutation a response sees after its responder built it.
pub fn apply_cors(response: &mut Response<ResponseBody>) {
    let headers = response.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Origin, X-Requested-With, Content-Type, Accept, Range"),
    );
}

/// Log response build error.
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_416_carries_unbounded_content_range() {
        let response = build_416_response(1234);
        assert_eq!(response.status(), 416);
        assert_eq!(
            response.headers().get("Content-Range").unwrap(),
            "bytes */1234"
        );
    }

    #[test]
    fn test_error_response_status_and_type() {
        let response = build_error_response(404, "<h1>Not Found</h1>".to_string());
        assert_eq!(response.status(), 404);
        assert_eq!(response.headers().get("Content-Type").unwrap(), "text/html");
        assert_eq!(response.headers().get("Content-Length").unwrap(), "18");
    }

    #[test]
    fn test_apply_cors_appends_fixed_headers() {
        let mut response = build_html_response("<p>ok</p>".to_string());
        apply_cors(&mut response);
        assert_eq!(
            response.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Headers")
                .unwrap(),
            "Origin, X-Requested-With, Content-Type, Accept, Range"
        );
        // Applying twice leaves the same two values in place.
        apply_cors(&mut response);
        assert_eq!(
            response
                .headers()
                .get_all("Access-Control-Allow-Origin")
                .iter()
                .count(),
            1
        );
    }
}
