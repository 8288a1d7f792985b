//! servedir: a static file HTTP server.
//!
//! Given a root directory, each request path is resolved to a filesystem
//! entry under that root and answered with file content (with byte-range
//! support), an auto-generated directory listing, or an error page.

pub mod config;
pub mod error;
pub mod handler;
pub mod html;
pub mod http;
pub mod logger;
pub mod server;

pub use error::ServeError;
