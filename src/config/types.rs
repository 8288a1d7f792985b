// Configuration types module
// Defines the configuration data structures loaded at startup

use serde::Deserialize;

/// Main configuration structure. Immutable for the process lifetime.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Root directory to serve; canonicalized once at startup.
    pub root: String,
    /// Worker thread count; defaults to the number of CPU cores.
    pub workers: Option<usize>,
    /// Keep-alive enabled when non-zero, in seconds.
    pub keep_alive_timeout: u64,
    /// Per-connection cap, in seconds.
    pub connection_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Suppress access logging; errors are still reported.
    pub quiet: bool,
    /// Access log format (combined, common, or json)
    pub access_log_format: String,
    /// Access log file path (stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
}
