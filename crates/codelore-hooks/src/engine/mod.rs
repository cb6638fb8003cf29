//! Rule scoring engine
//!
//! Evaluates a user prompt against the rule document and produces the ranked
//! list of rules worth surfacing. Pure function of its inputs: the document
//! and config are immutable per-call snapshots, so the engine is safe to call
//! concurrently when embedded in a long-lived host.

use tracing::debug;

use crate::matcher::ConditionMatcher;
use crate::types::{ActivationConfig, Condition, MatchResult, RuleDocument, SkillRule};

/// Scores skill rules against user prompts
pub struct ScoringEngine;

impl ScoringEngine {
    /// Evaluate a prompt against a rule document under an activation config
    ///
    /// Returns the matched rules sorted by score descending; rules with equal
    /// scores keep their document order. Empty or whitespace-only prompts,
    /// a disabled config, and any matching global exclusion all short-circuit
    /// to an empty result.
    pub fn evaluate(
        prompt: &str,
        document: &RuleDocument,
        config: &ActivationConfig,
    ) -> Vec<MatchResult> {
        if !config.enabled {
            return Vec::new();
        }

        if prompt.trim().is_empty() {
            return Vec::new();
        }

        // Global exclusions suppress every rule, regardless of what the
        // triggers would otherwise score.
        if ConditionMatcher::any_matches(prompt, &document.global_exclusions) {
            debug!("Prompt suppressed by global exclusion");
            return Vec::new();
        }

        let threshold = config.threshold.unwrap_or(document.threshold);

        let mut results: Vec<MatchResult> = Vec::new();
        for rule in &document.rules {
            // A rule explicitly switched off in the config never appears,
            // regardless of score.
            if config.skills.get(&rule.name) == Some(&false) {
                debug!(rule = %rule.name, "Rule disabled by activation config");
                continue;
            }

            let (score, reasons) = Self::score_rule(prompt, rule);
            if score >= threshold {
                results.push(MatchResult {
                    name: rule.name.clone(),
                    score,
                    reasons,
                    description: rule.description.clone(),
                });
            }
        }

        // Stable sort: ties keep document order.
        results.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(matches = results.len(), "Prompt evaluation complete");
        results
    }

    /// Score a single rule against the prompt
    ///
    /// Rule-local exclusions override the triggers unconditionally: any match
    /// pins the score to 0 with no reasons. Otherwise each matching trigger
    /// adds its weight and contributes one reason, in trigger order.
    fn score_rule(prompt: &str, rule: &SkillRule) -> (i64, Vec<String>) {
        if ConditionMatcher::any_matches(prompt, &rule.exclusions) {
            return (0, Vec::new());
        }

        let mut score = 0;
        let mut reasons = Vec::new();

        for trigger in &rule.triggers {
            if !ConditionMatcher::matches(prompt, &trigger.condition) {
                continue;
            }
            score += trigger.weight;
            reasons.push(match &trigger.condition {
                Condition::Keyword(keyword) => format!("keyword \"{keyword}\""),
                Condition::Pattern(_) => "pattern match".to_string(),
                Condition::Never => unreachable!("Never conditions do not match"),
            });
        }

        (score, reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompiledPattern, Trigger};

    fn keyword_trigger(keyword: &str, weight: i64) -> Trigger {
        Trigger {
            condition: Condition::Keyword(keyword.to_string()),
            weight,
        }
    }

    fn rule(name: &str, triggers: Vec<Trigger>, exclusions: Vec<Condition>) -> SkillRule {
        SkillRule {
            name: name.to_string(),
            description: format!("{name} description"),
            triggers,
            exclusions,
        }
    }

    fn document(rules: Vec<SkillRule>) -> RuleDocument {
        RuleDocument {
            rules,
            global_exclusions: Vec::new(),
            threshold: 1,
        }
    }

    #[test]
    fn test_single_weighted_trigger() {
        let doc = document(vec![rule("R1", vec![keyword_trigger("search", 2)], vec![])]);

        let results =
            ScoringEngine::evaluate("how do I search this codebase", &doc, &ActivationConfig::default());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "R1");
        assert_eq!(results[0].score, 2);
        assert_eq!(results[0].reasons, vec!["keyword \"search\"".to_string()]);
    }

    #[test]
    fn test_rule_exclusion_overrides_triggers() {
        let doc = document(vec![rule(
            "R1",
            vec![keyword_trigger("search", 2)],
            vec![Condition::Keyword("already indexed".to_string())],
        )]);

        let results = ScoringEngine::evaluate(
            "I already indexed this, how do I search",
            &doc,
            &ActivationConfig::default(),
        );

        assert!(results.is_empty());
    }

    #[test]
    fn test_disabled_config_returns_empty() {
        let doc = document(vec![rule("R1", vec![keyword_trigger("search", 2)], vec![])]);
        let config = ActivationConfig {
            enabled: false,
            ..ActivationConfig::default()
        };

        assert!(ScoringEngine::evaluate("search", &doc, &config).is_empty());
    }

    #[test]
    fn test_empty_prompt_returns_empty() {
        let doc = document(vec![rule("R1", vec![keyword_trigger("", 1)], vec![])]);
        let config = ActivationConfig::default();

        assert!(ScoringEngine::evaluate("", &doc, &config).is_empty());
        assert!(ScoringEngine::evaluate("   \n\t", &doc, &config).is_empty());
    }

    #[test]
    fn test_global_exclusion_short_circuits() {
        let mut doc = document(vec![rule("R1", vec![keyword_trigger("search", 5)], vec![])]);
        doc.global_exclusions = vec![Condition::Keyword("no suggestions".to_string())];

        let results = ScoringEngine::evaluate(
            "search for this, no suggestions please",
            &doc,
            &ActivationConfig::default(),
        );

        assert!(results.is_empty());
    }

    #[test]
    fn test_config_skill_switch_skips_rule() {
        let doc = document(vec![
            rule("on", vec![keyword_trigger("query", 1)], vec![]),
            rule("off", vec![keyword_trigger("query", 9)], vec![]),
        ]);
        let mut config = ActivationConfig::default();
        config.skills.insert("off".to_string(), false);

        let results = ScoringEngine::evaluate("query something", &doc, &config);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "on");
    }

    #[test]
    fn test_config_threshold_overrides_document() {
        let mut doc = document(vec![rule("R1", vec![keyword_trigger("query", 1)], vec![])]);
        doc.threshold = 1;
        let config = ActivationConfig {
            threshold: Some(2),
            ..ActivationConfig::default()
        };

        assert!(ScoringEngine::evaluate("query", &doc, &config).is_empty());
    }

    #[test]
    fn test_weights_accumulate_in_trigger_order() {
        let doc = document(vec![rule(
            "R1",
            vec![
                keyword_trigger("vector", 2),
                keyword_trigger("store", 1),
                keyword_trigger("absent", 4),
            ],
            vec![],
        )]);

        let results =
            ScoringEngine::evaluate("the vector store", &doc, &ActivationConfig::default());

        assert_eq!(results[0].score, 3);
        assert_eq!(
            results[0].reasons,
            vec!["keyword \"vector\"".to_string(), "keyword \"store\"".to_string()]
        );
    }

    #[test]
    fn test_pattern_trigger_reason() {
        let doc = document(vec![rule(
            "R1",
            vec![Trigger {
                condition: Condition::Pattern(CompiledPattern::new(r"how (do|can) I")),
                weight: 1,
            }],
            vec![],
        )]);

        let results =
            ScoringEngine::evaluate("how do I query", &doc, &ActivationConfig::default());

        assert_eq!(results[0].reasons, vec!["pattern match".to_string()]);
    }

    #[test]
    fn test_sort_descending_stable_on_ties() {
        let doc = document(vec![
            rule("low", vec![keyword_trigger("query", 1)], vec![]),
            rule("tie-a", vec![keyword_trigger("query", 3)], vec![]),
            rule("tie-b", vec![keyword_trigger("query", 3)], vec![]),
        ]);

        let results = ScoringEngine::evaluate("query", &doc, &ActivationConfig::default());

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["tie-a", "tie-b", "low"]);
    }

    #[test]
    fn test_zero_trigger_rule_matches_only_at_zero_threshold() {
        let mut doc = document(vec![rule("bare", vec![], vec![])]);
        assert!(ScoringEngine::evaluate("anything", &doc, &ActivationConfig::default()).is_empty());

        doc.threshold = 0;
        let results = ScoringEngine::evaluate("anything", &doc, &ActivationConfig::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 0);
    }
}
