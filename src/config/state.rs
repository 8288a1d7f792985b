// Application state module
// Immutable state shared by every request task

use super::types::Config;
use std::io;
use std::path::PathBuf;

/// Application state: the loaded configuration plus the canonicalized
/// serving root. Created once at startup and never mutated.
pub struct AppState {
    pub config: Config,
    /// Canonical root directory; anchors every resolved request path.
    pub root: PathBuf,
}

impl AppState {
    /// Build the state, canonicalizing the configured root. Fails when the
    /// root does not exist or is not reachable.
    pub fn new(config: Config) -> io::Result<Self> {
        let root = std::fs::canonicalize(&config.server.root)?;
        Ok(Self { config, root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_config(root: &str) -> Config {
        let mut config = Config::load_from("nonexistent-config").unwrap();
        config.server.root = root.to_string();
        config
    }

    #[test]
    fn test_root_is_canonicalized() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(test_config(dir.path().to_str().unwrap())).unwrap();
        assert_eq!(state.root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        assert!(AppState::new(test_config("/definitely/not/a/real/dir")).is_err());
    }
}
