//! Board path management
//!
//! Handles board root detection and database path resolution.

use std::path::PathBuf;

use super::config::Config;

/// Environment variable for board root configuration
pub const BOARD_ROOT_ENV: &str = "TAGBOARD_ROOT";

/// Board paths wrapper that combines config and resolved paths
pub struct BoardPaths {
    pub root: PathBuf,
    pub database: PathBuf,
    pub config: Config,
}

impl BoardPaths {
    /// Create BoardPaths from environment variable or current directory.
    /// Loads config from the board root.
    pub fn new() -> Self {
        let root = get_board_root();
        Self::from_root(root)
    }

    /// Create BoardPaths from a specific root directory
    pub fn from_root(root: PathBuf) -> Self {
        let config = Config::load(&root);
        Self::from_root_with_config(root, config)
    }

    /// Create BoardPaths with explicit config
    pub fn from_root_with_config(root: PathBuf, config: Config) -> Self {
        let database = config.database_path(&root);

        Self {
            database,
            root,
            config,
        }
    }

    /// Get the loaded configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

impl Default for BoardPaths {
    fn default() -> Self {
        Self::new()
    }
}

/// Get board root path from environment variable or current directory.
/// Priority: TAGBOARD_ROOT env var > current directory
pub fn get_board_root() -> PathBuf {
    if let Ok(path) = std::env::var(BOARD_ROOT_ENV) {
        let board_path = PathBuf::from(&path);
        if board_path.exists() {
            return board_path;
        }
        eprintln!(
            "Warning: {} is set to '{}' but path does not exist. Falling back to current directory.",
            BOARD_ROOT_ENV, path
        );
    }
    std::env::current_dir().expect("Failed to get current directory")
}
