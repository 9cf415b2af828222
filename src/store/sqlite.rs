//! SQLite-backed question store.
//!
//! Stands in for the hosted board backend in local and test setups. Tags
//! are stored as a JSON array per row, NULL when the author applied none.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};

use super::{QuestionStore, StoreError};
use crate::core::question::NewQuestion;

/// Question store on a local SQLite database
pub struct SqliteQuestionStore {
    conn: Mutex<Connection>,
}

impl SqliteQuestionStore {
    /// Open or create the question database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open question store: {}", path.display()))?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;

        Ok(store)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                body TEXT NOT NULL DEFAULT '',
                tags TEXT,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_questions_created_at ON questions(created_at);
            "#,
        )?;

        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("question store lock poisoned"))
    }

    /// Insert a question, returning its row id
    pub fn insert_question(&self, question: &NewQuestion) -> Result<i64> {
        let created_at = question.created_at.unwrap_or_else(Utc::now);
        let tags_json = match &question.tags {
            Some(tags) => Some(serde_json::to_string(tags)?),
            None => None,
        };

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO questions (title, body, tags, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                question.title,
                question.body,
                tags_json,
                timestamp(created_at)
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Total number of stored questions
    pub fn question_count(&self) -> Result<i64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;

        Ok(count)
    }

    /// Number of questions carrying a tag array
    pub fn tagged_question_count(&self) -> Result<i64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM questions WHERE tags IS NOT NULL",
            [],
            |row| row.get(0),
        )?;

        Ok(count)
    }

    fn collect_tag_rows(
        conn: &Connection,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Vec<String>>, StoreError> {
        let mut stmt = conn.prepare(sql)?;
        let raw_rows = stmt
            .query_map(params, |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<String>, _>>()?;

        let mut rows = Vec::with_capacity(raw_rows.len());
        for raw in raw_rows {
            match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(tags) => rows.push(tags),
                Err(e) => {
                    // One bad row must not abort the whole aggregation
                    log::warn!("skipping malformed tag row: {}", e);
                }
            }
        }

        Ok(rows)
    }
}

#[async_trait]
impl QuestionStore for SqliteQuestionStore {
    async fn tag_rows_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<Vec<String>>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Unavailable("question store lock poisoned".to_string()))?;

        // Rowid order keeps the first-seen tie-break deterministic here.
        Self::collect_tag_rows(
            &conn,
            "SELECT tags FROM questions WHERE tags IS NOT NULL AND created_at >= ?1 ORDER BY id",
            &[&timestamp(cutoff)],
        )
    }

    async fn all_tag_rows(&self) -> Result<Vec<Vec<String>>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Unavailable("question store lock poisoned".to_string()))?;

        Self::collect_tag_rows(
            &conn,
            "SELECT tags FROM questions WHERE tags IS NOT NULL ORDER BY id",
            &[],
        )
    }
}

/// RFC3339 UTC seconds, so lexicographic compare on the TEXT column is
/// chronological
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn memory_store() -> SqliteQuestionStore {
        SqliteQuestionStore::open(Path::new(":memory:")).unwrap()
    }

    fn question(tags: Option<&[&str]>, created_at: DateTime<Utc>) -> NewQuestion {
        NewQuestion {
            title: "t".to_string(),
            body: "b".to_string(),
            tags: tags.map(|t| t.iter().map(|s| s.to_string()).collect()),
            created_at: Some(created_at),
        }
    }

    #[tokio::test]
    async fn test_cutoff_and_null_filtering() {
        let store = memory_store();
        let now = Utc::now();

        store
            .insert_question(&question(Some(&["react", "css"]), now))
            .unwrap();
        store
            .insert_question(&question(Some(&["python"]), now - Duration::days(40)))
            .unwrap();
        store.insert_question(&question(None, now)).unwrap();

        let rows = store.tag_rows_since(now - Duration::days(30)).await.unwrap();
        assert_eq!(rows, vec![vec!["react".to_string(), "css".to_string()]]);

        let all = store.all_tag_rows().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(store.question_count().unwrap(), 3);
        assert_eq!(store.tagged_question_count().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_rows_come_back_in_insertion_order() {
        let store = memory_store();
        let now = Utc::now();

        store.insert_question(&question(Some(&["react"]), now)).unwrap();
        store.insert_question(&question(Some(&["css"]), now)).unwrap();
        store.insert_question(&question(Some(&["api"]), now)).unwrap();

        let rows = store.tag_rows_since(now - Duration::days(1)).await.unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["react".to_string()],
                vec!["css".to_string()],
                vec!["api".to_string()]
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_tag_row_is_skipped() {
        let store = memory_store();
        let now = Utc::now();

        store.insert_question(&question(Some(&["react"]), now)).unwrap();
        {
            let conn = store.conn.lock().unwrap();
            conn.execute(
                "INSERT INTO questions (title, body, tags, created_at) VALUES ('t', '', 'not json', ?1)",
                [timestamp(now)],
            )
            .unwrap();
        }

        let rows = store.all_tag_rows().await.unwrap();
        assert_eq!(rows, vec![vec!["react".to_string()]]);
    }

    #[test]
    fn test_open_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.db");
        let store = SqliteQuestionStore::open(&path).unwrap();
        assert_eq!(store.question_count().unwrap(), 0);
        assert!(path.exists());
    }
}
