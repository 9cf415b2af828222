//! Question store boundary.
//!
//! The board backend owns the question collection; this engine only needs
//! a read-only projection of tag arrays, filterable by creation time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

pub mod sqlite;

pub use sqlite::SqliteQuestionStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("question store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed question row: {0}")]
    MalformedRow(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

/// Read-only projection of the board's question collection.
///
/// Rows with an absent/null tag array are excluded at this boundary, so
/// callers always receive concrete tag lists. Row order is whatever the
/// backend returns; backends without a stable order make the trending
/// tie-break (first-seen wins) nondeterministic across calls.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Tag arrays of questions created at or after `cutoff`
    async fn tag_rows_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<Vec<String>>, StoreError>;

    /// Tag arrays across the whole corpus
    async fn all_tag_rows(&self) -> Result<Vec<Vec<String>>, StoreError>;
}
