//! Advisory payload rendering
//!
//! Turns engine and classifier output into the text the host injects into
//! the assistant's context. Prompt-submit advisories are printed as a plain
//! reminder block; tool-use advisories are wrapped in the host's camelCase
//! JSON envelope.

use serde::Serialize;

use crate::types::MatchResult;

/// Hook output envelope as the host expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

/// Inner payload of the hook output envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    /// Which hook produced the context ("PreToolUse" / "PostToolUse")
    pub hook_event_name: String,

    /// Text injected into the assistant's context
    pub additional_context: String,
}

impl HookOutput {
    /// Wrap advisory text for a given hook event
    pub fn with_context(hook_event_name: &str, additional_context: String) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: hook_event_name.to_string(),
                additional_context,
            },
        }
    }
}

/// Render the skill-activation reminder for matched rules
///
/// `max_reasons` caps how many matched-trigger reasons are listed per skill;
/// the scores and ordering always reflect the full evaluation.
pub fn format_activation_reminder(matches: &[MatchResult], max_reasons: usize) -> String {
    let mut lines = vec![
        "<system-reminder>".to_string(),
        "CODELORE SKILL ACTIVATION".to_string(),
        String::new(),
        "The user's prompt suggests they may benefit from these skills.".to_string(),
        "For EACH skill below, decide YES/NO:".to_string(),
        "- YES: Invoke via Skill tool: Skill(skill='codelore:<skill-name>')".to_string(),
        "- NO: Skip (user doesn't need this guidance)".to_string(),
        String::new(),
        "Candidate skills (ranked by relevance):".to_string(),
    ];

    for result in matches {
        lines.push(String::new());
        lines.push(format!("  [{}] (score={})", result.name, result.score));
        lines.push(format!("  Purpose: {}", result.description));
        let shown: Vec<&str> = result
            .reasons
            .iter()
            .take(max_reasons)
            .map(String::as_str)
            .collect();
        lines.push(format!("  Matched: {}", shown.join(", ")));
    }

    lines.push(String::new());
    lines.push("Evaluate quickly, then answer the user's question.".to_string());
    lines.push("</system-reminder>".to_string());

    lines.join("\n")
}

/// Render the pre-tool-use suggestion for a dependency-code access
pub fn format_pre_tool_suggestion(action: &str) -> String {
    format!(
        "CODELORE SUGGESTION\n\
         \n\
         You're about to {action} which appears to be dependency/library code.\n\
         \n\
         Consider querying Codelore instead:\n\
         - Use MCP tool `search` with a relevant query\n\
         - Or invoke `/codelore:search <query>`\n\
         \n\
         Codelore provides indexed, searchable access to library sources - faster and \
         more context-efficient than grepping through dependency directories.\n\
         \n\
         If you don't have this library indexed, continue with your current approach."
    )
}

/// Render the post-tool-use reminder, with the library named when extraction
/// succeeded
pub fn format_post_tool_reminder(action: &str, library: Option<&str>) -> String {
    let library_hint = library.map(|name| format!(" ({name})")).unwrap_or_default();
    let subject = library.unwrap_or("the library");
    let index_suggestion = match library {
        Some(name) => format!("If {name} is not indexed, consider: /codelore:add-repo"),
        None => "Consider indexing frequently-used libraries with /codelore:add-repo".to_string(),
    };

    format!(
        "CODELORE REMINDER\n\
         \n\
         You just {action} - this is dependency/library code{library_hint}.\n\
         \n\
         For FUTURE queries about this library, use Codelore instead:\n\
         - MCP tool: search(query=\"your question about {subject}\")\n\
         - Slash command: /codelore:search <query>\n\
         \n\
         Codelore provides indexed, semantic search across library sources - significantly \
         faster and more context-efficient than reading through dependency directories.\n\
         \n\
         {index_suggestion}"
    )
}
