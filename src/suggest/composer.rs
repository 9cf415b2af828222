//! Suggestion composition.
//!
//! Joins the synchronous content extraction with the asynchronous
//! trending query and merges both into one deduplicated bundle. The
//! composer never fails: a degraded side just shortens the lists.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use super::dictionary::TagDictionary;
use super::extractor::ContentTagExtractor;
use super::trending::TrendingAggregator;
use crate::core::config::SuggestConfig;
use crate::store::QuestionStore;

/// Suggestion lists offered while authoring a question.
///
/// `content_based` and `trending` are the raw per-source lists; `all` is
/// their union, deduplicated in first-occurrence order. Built fresh per
/// request and consumed by a single render.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuggestionBundle {
    pub content_based: Vec<String>,
    pub trending: Vec<String>,
    pub all: Vec<String>,
}

/// Composes content-based and trending suggestions
pub struct SuggestionComposer {
    extractor: ContentTagExtractor,
    aggregator: TrendingAggregator,
    /// Cap on the merged list
    max_suggestions: usize,
}

impl SuggestionComposer {
    /// Create a composer with the default merged cap of 20
    pub fn new(extractor: ContentTagExtractor, aggregator: TrendingAggregator) -> Self {
        Self {
            extractor,
            aggregator,
            max_suggestions: 20,
        }
    }

    /// Set the merged cap
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Wire up the full engine against a store, using configured limits
    /// and the built-in dictionary
    pub fn from_config(store: Arc<dyn QuestionStore>, config: &SuggestConfig) -> Self {
        let extractor = ContentTagExtractor::new(TagDictionary::builtin())
            .with_max_tags(config.max_content_tags);
        let aggregator = TrendingAggregator::new(store)
            .with_window_days(config.trending_window_days)
            .with_max_tags(config.max_trending_tags);

        Self::new(extractor, aggregator).with_max_suggestions(config.max_suggestions)
    }

    /// Suggestions for the question being authored.
    ///
    /// Extraction and the trending query run concurrently; neither side
    /// can fail the call. Dropping the returned future abandons the
    /// trending query.
    pub async fn get_tag_suggestions(&self, title: &str, body: &str) -> SuggestionBundle {
        let (content_based, trending) = tokio::join!(
            async { self.extractor.extract(title, body) },
            self.aggregator.trending_tags(),
        );

        let all = merge_unique(&content_based, &trending, self.max_suggestions);

        SuggestionBundle {
            content_based,
            trending,
            all,
        }
    }
}

/// Concatenate content-based then trending, keeping the first occurrence
/// of each tag, capped at `limit`
fn merge_unique(content_based: &[String], trending: &[String], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();

    content_based
        .iter()
        .chain(trending.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    struct StubStore {
        rows: Result<Vec<Vec<String>>, ()>,
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

    fn composer_over(rows: Result<Vec<Vec<String>>, ()>) -> SuggestionComposer {
        let store = Arc::new(StubStore { rows });
        SuggestionComposer::from_config(store, &SuggestConfig::default())
    }

    #[tokio::test]
    async fn test_bundle_merges_and_dedupes_in_order() {
        let composer = composer_over(Ok(vec![
            vec!["css".to_string(), "node.js".to_string()],
            vec!["css".to_string()],
        ]));

        let bundle = composer
            .get_tag_suggestions("How do I center a div with CSS flexbox?", "")
            .await;

        assert_eq!(bundle.content_based, vec!["css".to_string(), "tutorial".to_string()]);
        assert_eq!(bundle.trending, vec!["css".to_string(), "node.js".to_string()]);
        // css appears once, at its content-based position
        assert_eq!(
            bundle.all,
            vec!["css".to_string(), "tutorial".to_string(), "node.js".to_string()]
        );
    }

    #[tokio::test]
    async fn test_store_failure_leaves_content_side_intact() {
        let composer = composer_over(Err(()));

        let bundle = composer.get_tag_suggestions("REACT hooks question", "").await;

        assert!(bundle.trending.is_empty());
        assert!(bundle.content_based.contains(&"react".to_string()));
        assert_eq!(bundle.all, bundle.content_based);
    }

    #[tokio::test]
    async fn test_empty_content_with_empty_store() {
        let composer = composer_over(Ok(vec![]));
        let bundle = composer.get_tag_suggestions("", "").await;

        assert!(bundle.content_based.is_empty());
        assert!(bundle.trending.is_empty());
        assert!(bundle.all.is_empty());
    }

    #[tokio::test]
    async fn test_all_capped_at_twenty_without_duplicates() {
        // 18 trending tags on top of up to 8 content tags
        let rows: Vec<Vec<String>> = (0..18).map(|i| vec![format!("tag{}", i)]).collect();
        let composer = composer_over(Ok(rows));

        let bundle = composer
            .get_tag_suggestions(
                "react javascript typescript python css html oauth graphql",
                "",
            )
            .await;

        assert!(bundle.all.len() <= 20);

        let mut deduped = bundle.all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), bundle.all.len());

        // first-occurrence order: content-based tags lead
        assert_eq!(bundle.all[0], bundle.content_based[0]);
    }

    #[test]
    fn test_merge_unique_prefers_first_occurrence() {
        let content = vec!["react".to_string(), "css".to_string()];
        let trending = vec!["css".to_string(), "api".to_string()];
        let merged = merge_unique(&content, &trending, 20);
        assert_eq!(
            merged,
            vec!["react".to_string(), "css".to_string(), "api".to_string()]
        );
    }

    #[test]
    fn test_merge_unique_respects_limit() {
        let content: Vec<String> = (0..15).map(|i| format!("c{}", i)).collect();
        let trending: Vec<String> = (0..15).map(|i| format!("t{}", i)).collect();
        let merged = merge_unique(&content, &trending, 20);
        assert_eq!(merged.len(), 20);
    }
}
