//! Tagboard configuration module
//!
//! Config loading priority:
//! 1. Board config: .tagboard.json in the board root
//! 2. Built-in defaults
//!
//! Philosophy: the engine is a helper for the Q&A board frontend.
//! The board owns presentation; the engine follows its limits.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name, looked up in the board root
pub const CONFIG_FILE_NAME: &str = ".tagboard.json";
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub suggest: SuggestConfig,

    #[serde(default)]
    pub schema: SchemaConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Suggestion engine limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_max_content_tags")]
    pub max_content_tags: usize,

    #[serde(default = "default_max_trending_tags")]
    pub max_trending_tags: usize,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    #[serde(default = "default_trending_window_days")]
    pub trending_window_days: i64,
}

fn default_max_content_tags() -> usize {
    8
}

fn default_max_trending_tags() -> usize {
    15
}

fn default_max_suggestions() -> usize {
    20
}

fn default_trending_window_days() -> i64 {
    30
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_content_tags: default_max_content_tags(),
            max_trending_tags: default_max_trending_tags(),
            max_suggestions: default_max_suggestions(),
            trending_window_days: default_trending_window_days(),
        }
    }
}

/// Tag selection rules enforced on question submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,

    #[serde(default = "default_min_tags")]
    pub min_tags: usize,

    #[serde(default = "default_true")]
    pub lowercase_tags: bool,
}

fn default_max_tags() -> usize {
    5
}

fn default_min_tags() -> usize {
    1
}

fn default_true() -> bool {
    true
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            max_tags: default_max_tags(),
            min_tags: default_min_tags(),
            lowercase_tags: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    "questions.db".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            suggest: SuggestConfig::default(),
            schema: SchemaConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    pub fn load(board_root: &Path) -> Self {
        let config_path = board_root.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => {
                    if config.version > CONFIG_VERSION {
                        eprintln!(
                            "Warning: Config version {} is newer than supported version {}.",
                            config.version, CONFIG_VERSION
                        );
                    }
                    return config;
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load {}: {}. Using defaults.",
                        CONFIG_FILE_NAME, e
                    );
                }
            }
        }

        Self::default()
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, board_root: &Path) -> Result<()> {
        let config_path = board_root.join(CONFIG_FILE_NAME);
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Resolve the question database path against the board root
    pub fn database_path(&self, board_root: &Path) -> PathBuf {
        board_root.join(&self.store.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.suggest.max_content_tags, 8);
        assert_eq!(config.suggest.max_trending_tags, 15);
        assert_eq!(config.suggest.max_suggestions, 20);
        assert_eq!(config.suggest.trending_window_days, 30);
        assert_eq!(config.schema.max_tags, 5);
        assert!(config.schema.lowercase_tags);
    }

    #[test]
    fn test_parse_partial_config() {
        let json = r#"{"suggest": {"max_trending_tags": 10}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.suggest.max_trending_tags, 10);
        assert_eq!(config.suggest.max_content_tags, 8);
        assert_eq!(config.store.database, "questions.db");
    }

    #[test]
    fn test_database_path() {
        let config = Config::default();
        let path = config.database_path(Path::new("/srv/board"));
        assert_eq!(path, Path::new("/srv/board/questions.db"));
    }
}
