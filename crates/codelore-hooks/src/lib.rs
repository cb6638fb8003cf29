//! Codelore Hook Engine
//!
//! Advisory hooks for AI coding assistants: nudge the assistant toward the
//! Codelore semantic knowledge base instead of raw filesystem inspection, and
//! surface bundled skills when the user's prompt suggests they would help.
//!
//! # Overview
//!
//! Two independent decisions are made per invocation:
//!
//! 1. **Path classification** — is the path a tool is touching third-party
//!    dependency code, and if so, which library is it?
//! 2. **Rule scoring** — which skill rules from the declarative rule document
//!    does the user's prompt trigger, at what score, in what order?
//!
//! Both are pure functions over immutable per-invocation snapshots: the rule
//! document and activation config are loaded fresh, evaluated, and discarded.
//! Nothing persists between invocations and no result is ever required — the
//! worst case by design is "no advisory", never an error surfaced to the
//! host.
//!
//! # Architecture
//!
//! 1. **Types** (`types`): tagged data model, defaults filled at load time
//! 2. **Condition Matcher** (`matcher`): keyword/regex predicates over text
//! 3. **Path Classifier** (`classifier`): dependency-directory detection and
//!    library name extraction
//! 4. **Scoring Engine** (`engine`): trigger/exclusion evaluation and ranking
//! 5. **Configuration** (`config`): tolerant loading, linting, templates
//! 6. **Events & Dispatch** (`events`, `dispatcher`): hook payload parsing
//!    and routing to the right component
//! 7. **Advisory** (`advisory`): rendering for the host's context injection
//!
//! # Quick Start
//!
//! ```
//! use codelore_hooks::{
//!     ActivationConfig, Advisory, ConfigLoader, HookDispatcher, HookEvent, HookStage,
//! };
//!
//! let document = ConfigLoader::parse_rules(
//!     r#"{"skills": [{
//!         "name": "knowledge-search",
//!         "description": "Query the knowledge base",
//!         "triggers": [{"keyword": "search", "weight": 2}]
//!     }], "threshold": 1}"#,
//! )
//! .expect("valid document");
//!
//! let event = HookEvent::from_json(r#"{"prompt": "how do I search the docs"}"#)
//!     .expect("valid event");
//!
//! let advisory = HookDispatcher::dispatch(
//!     HookStage::UserPrompt,
//!     &event,
//!     &document,
//!     &ActivationConfig::default(),
//! );
//! assert!(matches!(advisory, Some(Advisory::Prompt(_))));
//! ```
//!
//! # Rule document
//!
//! Hand-authored JSON, loaded read-only from
//! `<plugin_root>/hooks/skill-rules.json`:
//!
//! ```json
//! {
//!   "skills": [
//!     {
//!       "name": "knowledge-search",
//!       "description": "Query indexed library docs",
//!       "triggers": [
//!         {"keyword": "search", "weight": 2},
//!         {"regex": "how (do|can) I"}
//!       ],
//!       "exclusions": [{"keyword": "already indexed"}]
//!     }
//!   ],
//!   "threshold": 1,
//!   "globalExclusions": [{"keyword": "no suggestions"}]
//! }
//! ```
//!
//! The per-installation activation config
//! (`<data dir>/codelore/skill-activation.json`) layers on top: it can
//! disable the engine, override the threshold, switch individual skills off,
//! and adjust how many match reasons are rendered.
//!
//! # Error Handling
//!
//! Hook entry points never fail. Absent documents load as defaults,
//! malformed documents load as defaults with a `tracing` warning, and a bad
//! regex inside an otherwise healthy document degrades to a never-matching
//! condition. [`HookError`] exists for the strict parsing paths used by
//! tooling such as `lore validate`.

pub mod advisory;
pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod events;
pub mod matcher;
pub mod types;

// Re-export public types
pub use advisory::{
    format_activation_reminder, format_post_tool_reminder, format_pre_tool_suggestion, HookOutput,
    HookSpecificOutput,
};
pub use classifier::{PathClassifier, LIBRARY_PATH_MARKERS};
pub use config::{ConfigLoader, DocumentValidator, RuleTemplates};
pub use dispatcher::{Advisory, HookDispatcher};
pub use engine::ScoringEngine;
pub use error::{HookError, Result};
pub use events::{HookEvent, HookStage, ToolInput};
pub use matcher::ConditionMatcher;
pub use types::{
    ActivationConfig, CompiledPattern, Condition, MatchResult, PathClassification, RuleDocument,
    SkillRule, Trigger, DEFAULT_MAX_REASONS, DEFAULT_THRESHOLD, DEFAULT_TRIGGER_WEIGHT,
};
