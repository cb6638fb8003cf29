//! Condition matching against free text
//!
//! Shared by trigger and exclusion evaluation: both are plain conditions,
//! only the caller decides what a match means (add weight vs. suppress).

use crate::types::Condition;

/// Evaluates conditions against text
///
/// Matching never fails: malformed patterns were already degraded to
/// never-matching when the document was loaded, so the worst a bad document
/// can do is stay silent.
pub struct ConditionMatcher;

impl ConditionMatcher {
    /// Check whether a single condition matches the text
    ///
    /// Keywords use case-insensitive substring containment; patterns use
    /// case-insensitive unanchored search. An empty keyword is a substring of
    /// everything and therefore matches any text the engine evaluates; that
    /// is an authoring footgun the validator flags, not something suppressed
    /// here.
    pub fn matches(text: &str, condition: &Condition) -> bool {
        match condition {
            Condition::Keyword(keyword) => {
                text.to_lowercase().contains(&keyword.to_lowercase())
            }
            Condition::Pattern(pattern) => pattern.is_match(text),
            Condition::Never => false,
        }
    }

    /// Check whether any condition in a list matches the text
    pub fn any_matches(text: &str, conditions: &[Condition]) -> bool {
        conditions
            .iter()
            .any(|condition| Self::matches(text, condition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompiledPattern;

    #[test]
    fn test_keyword_case_insensitive() {
        let condition = Condition::Keyword("Search".to_string());
        assert!(ConditionMatcher::matches("how do I SEARCH this", &condition));
        assert!(!ConditionMatcher::matches("how do I find this", &condition));
    }

    #[test]
    fn test_keyword_is_substring_match() {
        let condition = Condition::Keyword("index".to_string());
        assert!(ConditionMatcher::matches("reindexing everything", &condition));
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        let condition = Condition::Keyword(String::new());
        assert!(ConditionMatcher::matches("anything at all", &condition));
    }

    #[test]
    fn test_pattern_unanchored_search() {
        let condition = Condition::Pattern(CompiledPattern::new(r"what('s| is) in"));
        assert!(ConditionMatcher::matches(
            "tell me what's in the store",
            &condition
        ));
        assert!(ConditionMatcher::matches(
            "so, WHAT IS IN there?",
            &condition
        ));
    }

    #[test]
    fn test_invalid_pattern_never_matches() {
        let condition = Condition::Pattern(CompiledPattern::new("(unbalanced"));
        assert!(!ConditionMatcher::matches("(unbalanced", &condition));
    }

    #[test]
    fn test_never_condition() {
        assert!(!ConditionMatcher::matches("anything", &Condition::Never));
    }

    #[test]
    fn test_any_matches() {
        let conditions = vec![
            Condition::Keyword("vector".to_string()),
            Condition::Keyword("embedding".to_string()),
        ];
        assert!(ConditionMatcher::any_matches("embedding model", &conditions));
        assert!(!ConditionMatcher::any_matches("plain text", &conditions));
        assert!(!ConditionMatcher::any_matches("anything", &[]));
    }
}
