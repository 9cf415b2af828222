//! Content-based tag extraction.
//!
//! Scans the combined question title and body against the trigger
//! dictionary, then applies phrasing heuristics. Pure and synchronous:
//! the board editor calls it on every content change.

use super::dictionary::TagDictionary;

/// Phrasing heuristic, checked after the dictionary scan
struct HeuristicRule {
    triggers: &'static [&'static str],
    tag: &'static str,
}

// Fixed order: tutorial, debugging, best practices
const HEURISTIC_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        triggers: &["how to", "how do i"],
        tag: "tutorial",
    },
    HeuristicRule {
        triggers: &["error", "problem", "issue"],
        tag: "debugging",
    },
    HeuristicRule {
        triggers: &["best practice", "recommendation"],
        tag: "best practices",
    },
];

/// Content tag extractor over an immutable dictionary
pub struct ContentTagExtractor {
    dictionary: TagDictionary,
    /// Cap on returned suggestions
    max_tags: usize,
}

impl ContentTagExtractor {
    /// Create an extractor with the default cap of 8 suggestions
    pub fn new(dictionary: TagDictionary) -> Self {
        Self {
            dictionary,
            max_tags: 8,
        }
    }

    /// Set the suggestion cap
    pub fn with_max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = max_tags;
        self
    }

    /// Extract candidate tags from question content.
    ///
    /// Matching is substring-based and case-insensitive, with no word
    /// boundary requirement, so inflected and compound forms still
    /// trigger ("reactjs" matches the "react" trigger). Dictionary tags
    /// come first in dictionary order, then heuristic tags, capped at
    /// `max_tags`. Total over all inputs; empty content yields an empty
    /// list.
    pub fn extract(&self, title: &str, body: &str) -> Vec<String> {
        let text = format!("{} {}", title, body).to_lowercase();

        let mut tags: Vec<String> = Vec::new();

        for (tag, triggers) in self.dictionary.entries() {
            let matched = triggers.iter().any(|trigger| text.contains(trigger.as_str()));
            if matched && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }

        for rule in HEURISTIC_RULES {
            let matched = rule.triggers.iter().any(|trigger| text.contains(*trigger));
            if matched && !tags.iter().any(|t| t == rule.tag) {
                tags.push(rule.tag.to_string());
            }
        }

        tags.truncate(self.max_tags);
        tags
    }
}
