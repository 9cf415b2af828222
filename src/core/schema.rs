//! Tag selection rules for question authoring.
//!
//! The board UI enforces these client-side when the author clicks
//! suggestion chips; validating here keeps CLI and backend behavior in
//! parity with the frontend.

use super::config::SchemaConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum TagRuleViolation {
    NoTags,
    TooManyTags(usize),
    DuplicateTag(String),
    EmptyTag,
    NonLowercaseTag(String),
}

impl std::fmt::Display for TagRuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTags => write!(f, "Question needs at least one tag"),
            Self::TooManyTags(n) => write!(f, "Too many tags: {} (max 5)", n),
            Self::DuplicateTag(t) => write!(f, "Duplicate tag: {}", t),
            Self::EmptyTag => write!(f, "Tag must not be empty"),
            Self::NonLowercaseTag(t) => write!(f, "Tag must be lowercase: {}", t),
        }
    }
}

impl TagRuleViolation {
    /// Format violation message with config-aware limits
    pub fn format_with_config(&self, config: &SchemaConfig) -> String {
        match self {
            Self::NoTags => format!("Question needs at least {} tag(s)", config.min_tags),
            Self::TooManyTags(n) => format!("Too many tags: {} (max {})", n, config.max_tags),
            Self::DuplicateTag(t) => format!("Duplicate tag: {}", t),
            Self::EmptyTag => "Tag must not be empty".to_string(),
            Self::NonLowercaseTag(t) => format!("Tag must be lowercase: {}", t),
        }
    }
}

/// Validator for a full tag selection, with configurable rules
pub struct TagRules {
    max_tags: usize,
    min_tags: usize,
    lowercase_tags: bool,
}

impl TagRules {
    /// Create validator from config
    pub fn from_config(config: &SchemaConfig) -> Self {
        Self {
            max_tags: config.max_tags,
            min_tags: config.min_tags,
            lowercase_tags: config.lowercase_tags,
        }
    }

    pub fn max_tags(&self) -> usize {
        self.max_tags
    }

    /// Validate a tag selection as submitted with a question
    pub fn validate(&self, tags: &[String]) -> Vec<TagRuleViolation> {
        let mut violations = Vec::new();

        if tags.len() < self.min_tags {
            violations.push(TagRuleViolation::NoTags);
        }
        if tags.len() > self.max_tags {
            violations.push(TagRuleViolation::TooManyTags(tags.len()));
        }

        let mut seen = std::collections::HashSet::new();
        for tag in tags {
            if tag.trim().is_empty() {
                violations.push(TagRuleViolation::EmptyTag);
                continue;
            }
            if !seen.insert(tag.as_str()) {
                violations.push(TagRuleViolation::DuplicateTag(tag.clone()));
            }
            if self.lowercase_tags && tag.chars().any(|c| c.is_uppercase()) {
                violations.push(TagRuleViolation::NonLowercaseTag(tag.clone()));
            }
        }

        violations
    }
}

impl Default for TagRules {
    fn default() -> Self {
        Self::from_config(&SchemaConfig::default())
    }
}

/// The tags applied to a question while authoring it.
///
/// Mirrors the chip behavior in the board editor: adding trims the input,
/// then rejects empties, duplicates, and additions past the cap.
#[derive(Debug, Clone)]
pub struct TagSelection {
    tags: Vec<String>,
    max_tags: usize,
}

impl TagSelection {
    pub fn new(max_tags: usize) -> Self {
        Self {
            tags: Vec::new(),
            max_tags,
        }
    }

    /// Try to add a tag. Returns false if rejected.
    pub fn add(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.is_full() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= self.max_tags
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}
