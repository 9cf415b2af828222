//! Trending tag discovery over the recent question corpus.
//!
//! Tallies tag frequency across questions created in the trailing window
//! and ranks descending. Suggestions are an enhancement, never a blocking
//! dependency: any store failure degrades to an empty list.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::store::QuestionStore;

/// Frequency-ranked tag discovery over a question store
pub struct TrendingAggregator {
    store: Arc<dyn QuestionStore>,
    /// Trailing window in days
    window_days: i64,
    /// Cap on returned tags
    max_tags: usize,
}

impl TrendingAggregator {
    /// Create an aggregator with the default 30-day window and cap of 15
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self {
            store,
            window_days: 30,
            max_tags: 15,
        }
    }

    /// Set the trailing window
    pub fn with_window_days(mut self, window_days: i64) -> Self {
        self.window_days = window_days;
        self
    }

    /// Set the tag cap
    pub fn with_max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = max_tags;
        self
    }

    /// Top tags by frequency over the trailing window, names only.
    ///
    /// Ties keep first-seen order: the descending sort is stable over the
    /// order tags were first encountered in the scan. A store failure is
    /// logged and yields an empty list; this never raises.
    pub async fn trending_tags(&self) -> Vec<String> {
        let cutoff = Utc::now() - Duration::days(self.window_days);

        let rows = match self.store.tag_rows_since(cutoff).await {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("trending tags unavailable: {}", e);
                return Vec::new();
            }
        };

        rank_by_frequency(&rows, self.max_tags)
    }

    /// Every distinct tag across the whole corpus, sorted alphabetically.
    ///
    /// Same fail-soft policy as `trending_tags`.
    pub async fn all_tags(&self) -> Vec<String> {
        let rows = match self.store.all_tag_rows().await {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("tag listing unavailable: {}", e);
                return Vec::new();
            }
        };

        let mut tags: Vec<String> = rows.into_iter().flatten().collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

/// Tally tag frequency across rows and rank descending.
///
/// `counts` is kept in first-seen order; the stable sort preserves that
/// order among equal counts.
fn rank_by_frequency(rows: &[Vec<String>], limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tags in rows {
        for tag in tags {
            match index.get(tag) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(tag.clone(), counts.len());
                    counts.push((tag.clone(), 1));
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .map(|(tag, _)| tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    /// Store stub with fixed rows, or a fixed failure
    struct StubStore {
        rows: Result<Vec<Vec<String>>, ()>,
    }

    impl StubStore {
        fn with_rows(rows: &[&[&str]]) -> Arc<Self> {
            Arc::new(Self {
                rows: Ok(rows
                    .iter()
                    .map(|r| r.iter().map(|s| s.to_string()).collect())
                    .collect()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { rows: Err(()) })
        }
    }

    #[async_trait]
    impl QuestionStore for StubStore {
        async fn tag_rows_since(
            &self,
            _cutoff: DateTime<Utc>,
        ) -> Result<Vec<Vec<String>>, StoreError> {
            self.rows
                .clone()
                .map_err(|_| StoreError::Unavailable("stub down".to_string()))
        }

        async fn all_tag_rows(&self) -> Result<Vec<Vec<String>>, StoreError> {
            self.rows
                .clone()
                .map_err(|_| StoreError::Unavailable("stub down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_ranks_by_descending_frequency() {
        let store = StubStore::with_rows(&[&["css"], &["react", "css"], &["css", "node.js"]]);
        let trending = TrendingAggregator::new(store).trending_tags().await;
        assert_eq!(trending[0], "css");
        assert_eq!(trending.len(), 3);
    }

    #[tokio::test]
    async fn test_ties_keep_first_seen_order() {
        // react and css both end at count 2; react is seen first
        let store = StubStore::with_rows(&[&["react", "react", "css"], &["css"]]);
        let trending = TrendingAggregator::new(store).trending_tags().await;
        assert_eq!(trending, vec!["react".to_string(), "css".to_string()]);
    }

    #[tokio::test]
    async fn test_capped_at_max_tags() {
        let rows: Vec<Vec<String>> = (0..20).map(|i| vec![format!("tag{}", i)]).collect();
        let refs: Vec<Vec<&str>> = rows
            .iter()
            .map(|r| r.iter().map(|s| s.as_str()).collect())
            .collect();
        let slices: Vec<&[&str]> = refs.iter().map(|r| r.as_slice()).collect();

        let store = StubStore::with_rows(&slices);
        let trending = TrendingAggregator::new(store).trending_tags().await;
        assert_eq!(trending.len(), 15);
    }

    #[tokio::test]
    async fn test_store_failure_degrades_to_empty() {
        let aggregator = TrendingAggregator::new(StubStore::failing());
        assert!(aggregator.trending_tags().await.is_empty());
        assert!(aggregator.all_tags().await.is_empty());
    }

    #[tokio::test]
    async fn test_all_tags_sorted_unique() {
        let store = StubStore::with_rows(&[&["react", "css"], &["css", "api"]]);
        let tags = TrendingAggregator::new(store).all_tags().await;
        assert_eq!(
            tags,
            vec!["api".to_string(), "css".to_string(), "react".to_string()]
        );
    }

    #[test]
    fn test_rank_counts_every_occurrence_in_a_row() {
        let rows = vec![vec!["react".to_string(), "react".to_string()], vec!["css".to_string()]];
        let ranked = rank_by_frequency(&rows, 15);
        assert_eq!(ranked, vec!["react".to_string(), "css".to_string()]);
    }
}
