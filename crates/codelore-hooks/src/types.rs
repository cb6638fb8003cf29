//! Core data types for the hook engine
//!
//! This module defines the typed data model the engine evaluates: conditions,
//! weighted triggers, skill rules, the rule document, the per-installation
//! activation config, and the results the engine produces.
//!
//! The model is deliberately tagged and explicit. The externally authored
//! JSON documents are loosely typed (`{"keyword": ...}` or `{"regex": ...}`
//! objects with optional fields); the loader converts them into these types
//! exactly once, filling defaults and compiling patterns, so the scoring
//! logic never has to probe for missing fields.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::warn;

/// Default minimum score a rule must accumulate to be reported
pub const DEFAULT_THRESHOLD: i64 = 1;

/// Default weight of a trigger that does not declare one
pub const DEFAULT_TRIGGER_WEIGHT: i64 = 1;

/// Default cap on reasons rendered per matched skill
///
/// Presentation policy only: the engine always returns the full reason list,
/// the advisory renderer truncates it.
pub const DEFAULT_MAX_REASONS: usize = 3;

/// A regex condition compiled once at document load
///
/// Compilation failure is not an error: the document is externally editable,
/// so a bad pattern degrades to a condition that never matches while the rest
/// of the document stays live.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Option<Regex>,
}

impl CompiledPattern {
    /// Compile a pattern with case-insensitive, unanchored search semantics
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let regex = match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!(pattern = %source, error = %e, "Invalid regex in document, treating as never-matching");
                None
            }
        };
        Self { source, regex }
    }

    /// The pattern text as authored in the document
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the pattern compiled successfully
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    /// Unanchored search; an invalid pattern matches nothing
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// A predicate over a text string
///
/// Authored conditions carry either a `keyword` or a `regex` field. A
/// condition authored with neither is preserved as [`Condition::Never`] so
/// the no-match contract is explicit rather than an accident of field
/// lookups.
#[derive(Debug, Clone)]
pub enum Condition {
    /// Case-insensitive substring containment
    Keyword(String),
    /// Case-insensitive unanchored regex search
    Pattern(CompiledPattern),
    /// Authored with neither field; never satisfied
    Never,
}

/// A weighted condition that raises a rule's score when it matches
#[derive(Debug, Clone)]
pub struct Trigger {
    /// The condition to test against the prompt
    pub condition: Condition,

    /// Score contribution when the condition matches
    pub weight: i64,
}

/// A named rule from the rule document
///
/// Exclusions are plain conditions: any one matching suppresses the rule
/// unconditionally, regardless of what its triggers would score.
#[derive(Debug, Clone)]
pub struct SkillRule {
    /// Unique rule name (doubles as the skill identifier)
    pub name: String,

    /// Human-readable description rendered in advisories
    pub description: String,

    /// Weighted trigger conditions, evaluated in document order
    pub triggers: Vec<Trigger>,

    /// Rule-local suppression conditions
    pub exclusions: Vec<Condition>,
}

/// The declarative rule document, sole source of truth for what can match
#[derive(Debug, Clone)]
pub struct RuleDocument {
    /// Rules in document order
    pub rules: Vec<SkillRule>,

    /// Conditions that suppress every rule when any one matches
    pub global_exclusions: Vec<Condition>,

    /// Minimum accumulated score for a rule to be reported
    pub threshold: i64,
}

impl Default for RuleDocument {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            global_exclusions: Vec::new(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Per-installation overrides layered on top of the rule document
#[derive(Debug, Clone)]
pub struct ActivationConfig {
    /// Master switch for the scoring engine
    pub enabled: bool,

    /// Overrides the document threshold when set
    pub threshold: Option<i64>,

    /// Per-rule switches; a rule mapped to `false` is skipped entirely
    pub skills: HashMap<String, bool>,

    /// Cap on reasons rendered per matched skill
    pub max_reasons: usize,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: None,
            skills: HashMap::new(),
            max_reasons: DEFAULT_MAX_REASONS,
        }
    }
}

/// One rule that cleared the threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Rule name
    pub name: String,

    /// Accumulated trigger weight
    pub score: i64,

    /// One human-readable entry per matched trigger, in trigger order
    pub reasons: Vec<String>,

    /// Rule description, carried through for rendering
    pub description: String,
}

/// Outcome of classifying a filesystem path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathClassification {
    /// Whether the path lies inside third-party/dependency storage
    pub is_library: bool,

    /// Library name extracted from the path shape, when recognizable
    pub library: Option<String>,
}

impl PathClassification {
    /// A path outside any known dependency directory
    pub fn not_library() -> Self {
        Self {
            is_library: false,
            library: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_pattern_valid() {
        let pattern = CompiledPattern::new(r"how (do|can) I");
        assert!(pattern.is_valid());
        assert!(pattern.is_match("How DO I search"));
        assert!(!pattern.is_match("unrelated"));
    }

    #[test]
    fn test_compiled_pattern_invalid_never_matches() {
        let pattern = CompiledPattern::new("[unclosed");
        assert!(!pattern.is_valid());
        assert!(!pattern.is_match("[unclosed"));
        assert_eq!(pattern.source(), "[unclosed");
    }

    #[test]
    fn test_compiled_pattern_case_insensitive() {
        let pattern = CompiledPattern::new("VECTOR");
        assert!(pattern.is_match("a vector store"));
    }

    #[test]
    fn test_rule_document_default_threshold() {
        let document = RuleDocument::default();
        assert_eq!(document.threshold, DEFAULT_THRESHOLD);
        assert!(document.rules.is_empty());
    }

    #[test]
    fn test_activation_config_defaults() {
        let config = ActivationConfig::default();
        assert!(config.enabled);
        assert_eq!(config.threshold, None);
        assert_eq!(config.max_reasons, DEFAULT_MAX_REASONS);
    }
}
