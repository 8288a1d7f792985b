//! Response body construction
//!
//! Every response shares one boxed body type so fully materialized bodies
//! (rendered HTML, error messages) and lazily streamed file bodies can
//! flow through the same response signature.

use futures_util::TryStreamExt;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use std::io;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// Unified response body type.
pub type ResponseBody = BoxBody<Bytes, io::Error>;

/// Build an empty body.
pub fn empty() -> ResponseBody {
    Full::new(Bytes::new())
        .map_err(|never| match never {})
        .boxed()
}

/// Build a body from in-memory bytes.
pub fn full(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed()
}

/// Build a body that streams from an async reader in bounded chunks.
///
/// The reader, and the file handle behind it, is dropped when the stream
/// is exhausted or when the body is dropped early because the client
/// disconnected mid-response.
pub fn stream<R>(reader: R) -> ResponseBody
where
    R: AsyncRead + Send + Sync + 'static,
{
    StreamBody::new(ReaderStream::new(reader).map_ok(Frame::data)).boxed()
}
