//! Hook event payloads from the host assistant
//!
//! The host delivers one JSON object per invocation. The model here is
//! deliberately loose: every field is optional, unknown fields are ignored,
//! and anything unparseable maps to "no event" rather than an error, because
//! a hook that crashes on odd input is worse than one that stays quiet.

use serde::Deserialize;
use tracing::debug;

/// Which hook point the engine was invoked at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    /// The user submitted a prompt
    UserPrompt,
    /// A tool is about to run
    PreTool,
    /// A tool just ran
    PostTool,
}

impl HookStage {
    /// Hook event name as the host spells it
    pub fn event_name(self) -> &'static str {
        match self {
            HookStage::UserPrompt => "UserPromptSubmit",
            HookStage::PreTool => "PreToolUse",
            HookStage::PostTool => "PostToolUse",
        }
    }
}

/// Tool parameters relevant to path classification
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    /// Directory argument (search tools)
    #[serde(default)]
    pub path: Option<String>,

    /// File argument (read tools)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Search pattern, carried through for diagnostics
    #[serde(default)]
    pub pattern: Option<String>,
}

/// One hook invocation's payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookEvent {
    /// Event name as reported by the host
    #[serde(default)]
    pub hook_event_name: Option<String>,

    /// User prompt text (prompt-submit events)
    #[serde(default)]
    pub prompt: Option<String>,

    /// Tool being invoked (tool-use events)
    #[serde(default)]
    pub tool_name: Option<String>,

    /// Tool parameters (tool-use events)
    #[serde(default)]
    pub tool_input: Option<ToolInput>,
}

impl HookEvent {
    /// Parse an event from raw stdin content
    ///
    /// Empty input and malformed JSON both yield `None`; the caller treats
    /// that as the silent no-op path.
    pub fn from_json(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(input) {
            Ok(event) => Some(event),
            Err(e) => {
                debug!(error = %e, "Ignoring malformed hook input");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prompt_event() {
        let event = HookEvent::from_json(
            r#"{"hook_event_name": "UserPromptSubmit", "prompt": "how do I search"}"#,
        )
        .expect("Should parse");
        assert_eq!(event.prompt.as_deref(), Some("how do I search"));
        assert_eq!(event.hook_event_name.as_deref(), Some("UserPromptSubmit"));
    }

    #[test]
    fn test_parse_tool_event() {
        let event = HookEvent::from_json(
            r#"{"tool_name": "Read", "tool_input": {"file_path": "/repo/node_modules/x/i.js"}}"#,
        )
        .expect("Should parse");
        assert_eq!(event.tool_name.as_deref(), Some("Read"));
        assert_eq!(
            event.tool_input.unwrap().file_path.as_deref(),
            Some("/repo/node_modules/x/i.js")
        );
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let event = HookEvent::from_json(r#"{"prompt": "x", "session_id": "abc", "cwd": "/"}"#);
        assert!(event.is_some());
    }

    #[test]
    fn test_empty_input_is_none() {
        assert!(HookEvent::from_json("").is_none());
        assert!(HookEvent::from_json("  \n ").is_none());
    }

    #[test]
    fn test_malformed_input_is_none() {
        assert!(HookEvent::from_json("{not json").is_none());
        assert!(HookEvent::from_json("[1, 2, 3]").is_none());
    }

    #[test]
    fn test_stage_event_names() {
        assert_eq!(HookStage::UserPrompt.event_name(), "UserPromptSubmit");
        assert_eq!(HookStage::PreTool.event_name(), "PreToolUse");
        assert_eq!(HookStage::PostTool.event_name(), "PostToolUse");
    }
}
