//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by the handlers: range parsing,
//! the MIME table, body construction, and response builders.

pub mod body;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used items
pub use range::parse_range_header;
pub use response::{apply_cors, build_416_response, build_error_response, build_html_response};
