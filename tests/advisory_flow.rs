//! End-to-end advisory flows
//!
//! Drives the full path an invocation takes — JSON event in, rendered
//! advisory out — against documents parsed from JSON text, the way a real
//! installation exercises the engine.

use codelore_hooks::{
    ActivationConfig, Advisory, ConfigLoader, HookDispatcher, HookEvent, HookStage,
    PathClassifier, ScoringEngine,
};

fn parse_document(json: &str) -> codelore_hooks::RuleDocument {
    ConfigLoader::parse_rules(json).expect("Document should parse")
}

#[test]
fn node_modules_read_classifies_and_names_library() {
    let result = PathClassifier::classify("/repo/node_modules/lodash/index.js");
    assert!(result.is_library);
    assert_eq!(result.library.as_deref(), Some("lodash"));
}

#[test]
fn scoped_package_keeps_scope_in_name() {
    let result = PathClassifier::classify("/repo/node_modules/@babel/core/lib/index.js");
    assert!(result.is_library);
    assert_eq!(result.library.as_deref(), Some("@babel/core"));
}

#[test]
fn project_source_is_not_classified() {
    let result = PathClassifier::classify("/repo/src/app.ts");
    assert!(!result.is_library);
    assert_eq!(result.library, None);
}

#[test]
fn weighted_trigger_scores_and_ranks() {
    let document = parse_document(
        r#"{"skills": [{
            "name": "R1",
            "description": "first rule",
            "triggers": [{"keyword": "search", "weight": 2}]
        }], "threshold": 1}"#,
    );

    let results = ScoringEngine::evaluate(
        "how do I search this codebase",
        &document,
        &ActivationConfig::default(),
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "R1");
    assert_eq!(results[0].score, 2);
}

#[test]
fn exclusion_suppresses_despite_trigger_match() {
    let document = parse_document(
        r#"{"skills": [{
            "name": "R1",
            "description": "first rule",
            "triggers": [{"keyword": "search", "weight": 2}],
            "exclusions": [{"keyword": "already indexed"}]
        }], "threshold": 1}"#,
    );

    let results = ScoringEngine::evaluate(
        "I already indexed this, how do I search",
        &document,
        &ActivationConfig::default(),
    );

    assert!(results.is_empty());
}

#[test]
fn blank_prompts_match_nothing() {
    let document = parse_document(
        r#"{"skills": [{"name": "R1", "triggers": [{"keyword": ""}]}], "threshold": 1}"#,
    );

    for prompt in ["", "   ", "\n\t"] {
        assert!(
            ScoringEngine::evaluate(prompt, &document, &ActivationConfig::default()).is_empty()
        );
    }
}

#[test]
fn prompt_event_flows_to_reminder_text() {
    let document = parse_document(
        r#"{"skills": [
            {"name": "knowledge-search", "description": "Query the store",
             "triggers": [{"keyword": "search", "weight": 2}]},
            {"name": "when-to-query", "description": "Query vs read",
             "triggers": [{"keyword": "search"}]}
        ], "threshold": 1}"#,
    );
    let event =
        HookEvent::from_json(r#"{"prompt": "how do I search the codebase"}"#).expect("Should parse");

    let advisory = HookDispatcher::dispatch(
        HookStage::UserPrompt,
        &event,
        &document,
        &ActivationConfig::default(),
    )
    .expect("Should produce advisory");

    let Advisory::Prompt(text) = advisory else {
        panic!("Expected a prompt advisory");
    };
    assert!(text.contains("[knowledge-search] (score=2)"));
    assert!(text.contains("[when-to-query] (score=1)"));
    // Higher score renders first.
    assert!(text.find("knowledge-search").unwrap() < text.find("when-to-query").unwrap());
}

#[test]
fn tool_event_flows_to_json_envelope() {
    let event = HookEvent::from_json(
        r#"{"tool_name": "Grep", "tool_input": {"path": "/repo/node_modules/lodash", "pattern": "merge"}}"#,
    )
    .expect("Should parse");

    let advisory = HookDispatcher::dispatch(
        HookStage::PostTool,
        &event,
        &codelore_hooks::RuleDocument::default(),
        &ActivationConfig::default(),
    )
    .expect("Should produce advisory");

    let rendered = advisory.render();
    let value: serde_json::Value =
        serde_json::from_str(&rendered).expect("Rendered advisory should be JSON");
    assert_eq!(
        value["hookSpecificOutput"]["hookEventName"],
        serde_json::json!("PostToolUse")
    );
    let context = value["hookSpecificOutput"]["additionalContext"]
        .as_str()
        .expect("Context should be a string");
    assert!(context.contains("(lodash)"));
}

#[test]
fn global_exclusion_silences_prompt_events() {
    let document = parse_document(
        r#"{"skills": [{"name": "R1", "triggers": [{"keyword": "search", "weight": 9}]}],
            "threshold": 1,
            "globalExclusions": [{"keyword": "no suggestions"}]}"#,
    );
    let event = HookEvent::from_json(r#"{"prompt": "search but no suggestions please"}"#)
        .expect("Should parse");

    let advisory = HookDispatcher::dispatch(
        HookStage::UserPrompt,
        &event,
        &document,
        &ActivationConfig::default(),
    );
    assert!(advisory.is_none());
}

#[test]
fn invalid_regex_disables_one_condition_not_the_document() {
    let document = parse_document(
        r#"{"skills": [
            {"name": "broken", "triggers": [{"regex": "(unclosed"}]},
            {"name": "healthy", "triggers": [{"keyword": "search"}]}
        ], "threshold": 1}"#,
    );

    let results =
        ScoringEngine::evaluate("search something", &document, &ActivationConfig::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "healthy");
}
