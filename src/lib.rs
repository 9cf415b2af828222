//! Tagboard - tag suggestion engine for community Q&A boards
//!
//! The board frontend owns question authoring; this crate supplies the tag
//! suggestions shown next to the editor. Two independent sources feed the
//! result:
//!
//! - `suggest::extractor`: content-based extraction, a pure scan of the
//!   question text against a trigger dictionary
//! - `suggest::trending`: trending discovery, a frequency tally over the
//!   recent question corpus
//!
//! `suggest::composer` joins both into a single deduplicated bundle. The
//! question corpus is reached through the read-only `store::QuestionStore`
//! trait; `store::SqliteQuestionStore` is the bundled adapter.

pub mod commands;
pub mod core;
pub mod store;
pub mod suggest;

pub use store::{QuestionStore, SqliteQuestionStore, StoreError};
pub use suggest::{
    ContentTagExtractor, SuggestionBundle, SuggestionComposer, TagDictionary, TrendingAggregator,
};
