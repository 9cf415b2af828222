//! Question payloads exchanged with the question store.
//!
//! Only the fields this engine reads are modeled; the board backend owns
//! the full question schema (votes, answers, author, ...).

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A question payload accepted by the corpus importer.
///
/// `tags: None` means the author applied no tags; such rows are excluded
/// from trending aggregation at the store boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_question_minimal() {
        let q: NewQuestion = serde_json::from_str(r#"{"title": "How do I center a div?"}"#).unwrap();
        assert_eq!(q.title, "How do I center a div?");
        assert_eq!(q.body, "");
        assert!(q.tags.is_none());
        assert!(q.created_at.is_none());
    }

    #[test]
    fn test_new_question_full() {
        let q: NewQuestion = serde_json::from_str(
            r#"{"title": "t", "body": "b", "tags": ["css", "react"], "created_at": "2026-07-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            q.tags.as_deref(),
            Some(["css".to_string(), "react".to_string()].as_slice())
        );
        assert!(q.created_at.is_some());
    }
}
