//! Request handling pipeline
//!
//! Path resolution, file and directory responders, and the dispatcher
//! that wires them together per request.

pub mod listing;
pub mod resolve;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
