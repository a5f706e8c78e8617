// Application state module
// Immutable state shared across request handler tasks

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// Constructed once at startup and shared by `Arc`; nothing here mutates
/// after construction, so handlers need no locking.
pub struct AppState {
    pub config: Config,
    pub asset_root: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            asset_root: PathBuf::from(&config.server.asset_root),
            config: config.clone(),
        }
    }
}
