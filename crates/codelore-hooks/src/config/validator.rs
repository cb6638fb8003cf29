//! Rule document lint pass
//!
//! Warnings, never rejections: a rule document with problems still loads and
//! evaluates exactly as authored. The validator exists so tooling (and the
//! loader's logs) can point at the footguns — an empty keyword that matches
//! every prompt, a regex that never compiled, a rule that can never fire.

use std::collections::HashSet;

use crate::types::{ActivationConfig, Condition, RuleDocument};

/// Lints rule documents and activation configs
pub struct DocumentValidator;

impl DocumentValidator {
    /// Validate a rule document, returning human-readable warnings
    pub fn validate(document: &RuleDocument) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut seen = HashSet::new();
        for rule in &document.rules {
            if rule.name.is_empty() {
                warnings.push("Rule with empty name".to_string());
            }
            if !seen.insert(rule.name.as_str()) {
                warnings.push(format!("Duplicate rule name '{}'", rule.name));
            }
            if rule.triggers.is_empty() {
                warnings.push(format!(
                    "Rule '{}' has no triggers and can only match at threshold <= 0",
                    rule.name
                ));
            }

            for trigger in &rule.triggers {
                Self::lint_condition(
                    &trigger.condition,
                    &format!("trigger in rule '{}'", rule.name),
                    &mut warnings,
                );
            }
            for exclusion in &rule.exclusions {
                Self::lint_condition(
                    exclusion,
                    &format!("exclusion in rule '{}'", rule.name),
                    &mut warnings,
                );
            }
        }

        for exclusion in &document.global_exclusions {
            Self::lint_condition(exclusion, "global exclusion", &mut warnings);
        }

        warnings
    }

    /// Validate an activation config against the document it overrides
    ///
    /// Flags skill switches that reference no rule in the document, which
    /// usually means a typo or a stale config after a rules update.
    pub fn validate_activation(config: &ActivationConfig, document: &RuleDocument) -> Vec<String> {
        let known: HashSet<&str> = document.rules.iter().map(|r| r.name.as_str()).collect();
        let mut names: Vec<&String> = config
            .skills
            .keys()
            .filter(|name| !known.contains(name.as_str()))
            .collect();
        names.sort();
        names
            .into_iter()
            .map(|name| format!("Config switches unknown skill '{name}'"))
            .collect()
    }

    fn lint_condition(condition: &Condition, context: &str, warnings: &mut Vec<String>) {
        match condition {
            Condition::Keyword(keyword) if keyword.is_empty() => {
                warnings.push(format!("Empty keyword in {context} matches every prompt"));
            }
            Condition::Pattern(pattern) if !pattern.is_valid() => {
                warnings.push(format!(
                    "Invalid regex '{}' in {context} will never match",
                    pattern.source()
                ));
            }
            Condition::Never => {
                warnings.push(format!(
                    "Condition in {context} has neither keyword nor regex and will never match"
                ));
            }
            _ => {}
        }
    }
}
