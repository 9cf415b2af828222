//! Tag suggestion engine
//!
//! Two independent sources feed the suggestions shown while authoring a
//! question:
//!
//! - `extractor`: content-based extraction over the question text
//! - `trending`: frequency-ranked tags from the recent corpus
//!
//! `composer` joins both into a single deduplicated bundle.

pub mod composer;
pub mod dictionary;
pub mod extractor;
pub mod trending;

pub use composer::{SuggestionBundle, SuggestionComposer};
pub use dictionary::{DictionaryEntry, TagDictionary, BUILTIN_DICTIONARY};
pub use extractor::ContentTagExtractor;
pub use trending::TrendingAggregator;
