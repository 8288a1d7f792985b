//! File serving
//!
//! Produces full (200) and partial (206) file responses. Bodies are lazy
//! byte streams over the open file handle; the handle is released when the
//! stream completes or the client disconnects and the body is dropped.

use crate::error::ServeError;
use crate::http::body::{self, ResponseBody};
use crate::http::mime;
use crate::http::range::{ByteRange, RangeOutcome};
use crate::http::response;
use crate::logger;
use hyper::Response;
use std::io::SeekFrom;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

/// Serve a resolved file path with an already-parsed range outcome.
pub async fn serve_file(
    path: &Path,
    range: RangeOutcome,
) -> Result<Response<ResponseBody>, ServeError> {
    let metadata = tokio::fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(ServeError::NotFound);
    }
    let entity_size = metadata.len();
    let content_type = mime::content_type(path.extension().and_then(|e| e.to_str()));

    match range {
        RangeOutcome::NoRange => {
            let file = File::open(path).await?;
            Ok(build_full_response(file, entity_size, content_type))
        }
        RangeOutcome::Satisfiable(range) => {
            let mut file = File::open(path).await?;
            file.seek(SeekFrom::Start(range.start)).await?;
            // `take` caps the stream at exactly the requested byte count,
            // independent of how much each underlying read returns.
            let reader = file.take(range.len());
            Ok(build_partial_response(reader, range, entity_size, content_type))
        }
        RangeOutcome::Unsatisfiable => Ok(response::build_416_response(entity_size)),
    }
}

/// Build a 200 response streaming the whole file.
fn build_full_response(
    file: File,
    entity_size: u64,
    content_type: Option<&'static str>,
) -> Response<ResponseBody> {
    let mut builder = Response::builder()
        .status(200)
        .header("Content-Length", entity_size)
        .header("Accept-Ranges", "bytes");
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    builder.body(body::stream(file)).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build 200 response: {e}"));
        Response::new(body::empty())
    })
}

/// Build a 206 response streaming the requested byte interval.
fn build_partial_response(
    reader: tokio::io::Take<File>,
    range: ByteRange,
    entity_size: u64,
    content_type: Option<&'static str>,
) -> Response<ResponseBody> {
    let mut builder = Response::builder()
        .status(206)
        .header("Content-Length", range.len())
        .header(
            "Content-Range",
            format!("bytes {}-{}/{}", range.start, range.end, entity_size),
        )
        .header("Accept-Ranges", "bytes");
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    builder.body(body::stream(reader)).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build 206 response: {e}"));
        Response::new(body::empty())
    })
}
