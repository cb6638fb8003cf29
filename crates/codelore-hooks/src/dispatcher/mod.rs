//! Event dispatch
//!
//! Routes one parsed hook event to the right component: prompt-submit events
//! to the scoring engine, Grep/Read tool events to the path classifier.
//! Every route produces at most one advisory; `None` is the normal quiet
//! outcome, not a failure.

use tracing::debug;

use crate::advisory::{
    format_activation_reminder, format_post_tool_reminder, format_pre_tool_suggestion, HookOutput,
};
use crate::classifier::PathClassifier;
use crate::engine::ScoringEngine;
use crate::events::{HookEvent, HookStage};
use crate::types::{ActivationConfig, RuleDocument};

/// The single advisory a hook invocation may produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// Plain reminder text for prompt-submit hooks
    Prompt(String),

    /// Enveloped context for tool-use hooks
    ToolUse(HookOutput),
}

impl Advisory {
    /// Serialize to the exact string the hook prints to stdout
    pub fn render(&self) -> String {
        match self {
            Advisory::Prompt(text) => text.clone(),
            // HookOutput contains only string fields; serialization cannot fail.
            Advisory::ToolUse(output) => {
                serde_json::to_string(output).expect("HookOutput serializes")
            }
        }
    }
}

/// Tool access the classifier knows how to describe
enum ToolAccess<'a> {
    Grep(&'a str),
    Read(&'a str),
}

impl<'a> ToolAccess<'a> {
    fn from_event(event: &'a HookEvent) -> Option<Self> {
        let input = event.tool_input.as_ref()?;
        match event.tool_name.as_deref() {
            Some("Grep") => input.path.as_deref().map(ToolAccess::Grep),
            Some("Read") => input.file_path.as_deref().map(ToolAccess::Read),
            _ => None,
        }
    }

    fn path(&self) -> &'a str {
        match self {
            ToolAccess::Grep(path) | ToolAccess::Read(path) => path,
        }
    }

    /// Action phrase for the advisory, tense chosen by stage
    fn describe(&self, stage: HookStage) -> String {
        match (self, stage) {
            (ToolAccess::Grep(path), HookStage::PreTool) => format!("grep in `{path}`"),
            (ToolAccess::Grep(path), _) => format!("grepped in `{path}`"),
            (ToolAccess::Read(path), _) => format!("read `{path}`"),
        }
    }
}

/// Routes hook events to the engine or the classifier
pub struct HookDispatcher;

impl HookDispatcher {
    /// Dispatch one event, producing at most one advisory
    pub fn dispatch(
        stage: HookStage,
        event: &HookEvent,
        document: &RuleDocument,
        config: &ActivationConfig,
    ) -> Option<Advisory> {
        match stage {
            HookStage::UserPrompt => Self::dispatch_prompt(event, document, config),
            HookStage::PreTool | HookStage::PostTool => Self::dispatch_tool(stage, event),
        }
    }

    fn dispatch_prompt(
        event: &HookEvent,
        document: &RuleDocument,
        config: &ActivationConfig,
    ) -> Option<Advisory> {
        let prompt = event.prompt.as_deref()?;
        let matches = ScoringEngine::evaluate(prompt, document, config);
        if matches.is_empty() {
            return None;
        }
        debug!(matches = matches.len(), "Emitting skill activation reminder");
        Some(Advisory::Prompt(format_activation_reminder(
            &matches,
            config.max_reasons,
        )))
    }

    fn dispatch_tool(stage: HookStage, event: &HookEvent) -> Option<Advisory> {
        let access = ToolAccess::from_event(event)?;
        let classification = PathClassifier::classify(access.path());
        if !classification.is_library {
            return None;
        }

        let action = access.describe(stage);
        debug!(stage = stage.event_name(), %action, "Emitting library path advisory");
        let context = match stage {
            HookStage::PreTool => format_pre_tool_suggestion(&action),
            _ => format_post_tool_reminder(&action, classification.library.as_deref()),
        };
        Some(Advisory::ToolUse(HookOutput::with_context(
            stage.event_name(),
            context,
        )))
    }
}
