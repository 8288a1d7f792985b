//! Serving error taxonomy
//!
//! Every filesystem failure in the pipeline is reduced to one of these
//! variants before it reaches the fallback responder, which is the only
//! place that turns them into client-visible status codes.

use std::fmt;
use std::io;

/// Failure from a stat/open/enumerate operation.
#[derive(Debug)]
pub enum ServeError {
    /// Path is missing or unreadable; maps to 404.
    NotFound,
    /// Any other filesystem failure; maps to 500.
    Io(io::Error),
}

impl From<io::Error> for ServeError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => Self::NotFound,
            _ => Self::Io(err),
        }
    }
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for ServeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::NotFound => None,
        }
    }
}
