//! Tolerant document loading
//!
//! Reads the two external JSON documents and converts them into the typed
//! model in one explicit default-filling step. The raw serde structs mirror
//! the authored shape (optional fields, camelCase keys); nothing outside this
//! module ever probes for a missing field.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::validator::DocumentValidator;
use crate::error::Result;
use crate::types::{
    ActivationConfig, CompiledPattern, Condition, RuleDocument, SkillRule, Trigger,
    DEFAULT_MAX_REASONS, DEFAULT_THRESHOLD, DEFAULT_TRIGGER_WEIGHT,
};

/// Rule document location relative to the plugin root
const RULES_FILE: &str = "hooks/skill-rules.json";

/// Activation config directory under the user data dir
const CONFIG_DIR: &str = "codelore";

/// Activation config file name
const CONFIG_FILE: &str = "skill-activation.json";

/// A condition as authored: at most one of `keyword` / `regex`
#[derive(Debug, Default, Deserialize)]
struct RawCondition {
    #[serde(default)]
    keyword: Option<String>,
    #[serde(default)]
    regex: Option<String>,
}

impl RawCondition {
    /// Keyword wins when both fields are present, matching how the document
    /// format has always been read.
    fn into_condition(self) -> Condition {
        match (self.keyword, self.regex) {
            (Some(keyword), _) => Condition::Keyword(keyword),
            (None, Some(regex)) => Condition::Pattern(CompiledPattern::new(regex)),
            (None, None) => Condition::Never,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawTrigger {
    #[serde(flatten)]
    condition: RawCondition,
    #[serde(default)]
    weight: Option<i64>,
}

impl RawTrigger {
    fn into_trigger(self) -> Trigger {
        Trigger {
            condition: self.condition.into_condition(),
            weight: self.weight.unwrap_or(DEFAULT_TRIGGER_WEIGHT),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRule {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    triggers: Vec<RawTrigger>,
    #[serde(default)]
    exclusions: Vec<RawCondition>,
}

impl RawRule {
    fn into_rule(self) -> SkillRule {
        SkillRule {
            name: self.name,
            description: self.description,
            triggers: self.triggers.into_iter().map(RawTrigger::into_trigger).collect(),
            exclusions: self
                .exclusions
                .into_iter()
                .map(RawCondition::into_condition)
                .collect(),
        }
    }
}

/// The rule document as authored (`skills` is the historical key name)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRuleDocument {
    #[serde(default)]
    skills: Vec<RawRule>,
    #[serde(default)]
    threshold: Option<i64>,
    #[serde(default)]
    global_exclusions: Vec<RawCondition>,
}

impl RawRuleDocument {
    fn into_document(self) -> RuleDocument {
        RuleDocument {
            rules: self.skills.into_iter().map(RawRule::into_rule).collect(),
            global_exclusions: self
                .global_exclusions
                .into_iter()
                .map(RawCondition::into_condition)
                .collect(),
            threshold: self.threshold.unwrap_or(DEFAULT_THRESHOLD),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActivationConfig {
    #[serde(default)]
    enabled: Option<bool>,
    #[serde(default)]
    threshold: Option<i64>,
    #[serde(default)]
    skills: Option<HashMap<String, bool>>,
    #[serde(default)]
    max_reasons: Option<usize>,
}

impl RawActivationConfig {
    fn into_config(self) -> ActivationConfig {
        ActivationConfig {
            enabled: self.enabled.unwrap_or(true),
            threshold: self.threshold,
            skills: self.skills.unwrap_or_default(),
            max_reasons: self.max_reasons.unwrap_or(DEFAULT_MAX_REASONS),
        }
    }
}

/// Loads the rule document and activation config
///
/// Every `load_*` entry point is total: it returns a usable value no matter
/// what is (or is not) on disk. The strict `parse_*` variants exist for
/// tooling that reports problems instead of recovering from them.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the rule document from a plugin root
    ///
    /// Reads `<plugin_root>/hooks/skill-rules.json`; absent or malformed
    /// files yield the empty default document.
    pub fn load_rules(plugin_root: &Path) -> RuleDocument {
        Self::load_rules_file(&plugin_root.join(RULES_FILE))
    }

    /// Load a rule document from an explicit path, tolerantly
    pub fn load_rules_file(path: &Path) -> RuleDocument {
        let Some(content) = Self::read_optional(path) else {
            return RuleDocument::default();
        };
        match Self::parse_rules(&content) {
            Ok(document) => document,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed rule document, using empty rule set");
                RuleDocument::default()
            }
        }
    }

    /// Parse a rule document from JSON text, strictly
    ///
    /// Validation warnings are logged but do not fail the parse; only
    /// malformed JSON is an error.
    pub fn parse_rules(content: &str) -> Result<RuleDocument> {
        let raw: RawRuleDocument = serde_json::from_str(content)?;
        let document = raw.into_document();
        for warning in DocumentValidator::validate(&document) {
            warn!(%warning, "Rule document lint");
        }
        Ok(document)
    }

    /// Load the activation config from its default location
    ///
    /// `<data dir>/codelore/skill-activation.json`, falling back to defaults
    /// when the data dir cannot be resolved.
    pub fn load_activation() -> ActivationConfig {
        match Self::activation_config_path() {
            Some(path) => Self::load_activation_file(&path),
            None => {
                debug!("No user data directory, using default activation config");
                ActivationConfig::default()
            }
        }
    }

    /// Load an activation config from an explicit path, tolerantly
    pub fn load_activation_file(path: &Path) -> ActivationConfig {
        let Some(content) = Self::read_optional(path) else {
            return ActivationConfig::default();
        };
        match Self::parse_activation(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed activation config, using defaults");
                ActivationConfig::default()
            }
        }
    }

    /// Parse an activation config from JSON text, strictly
    pub fn parse_activation(content: &str) -> Result<ActivationConfig> {
        let raw: RawActivationConfig = serde_json::from_str(content)?;
        Ok(raw.into_config())
    }

    /// Default activation config path for this installation
    pub fn activation_config_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Read a file that is allowed to be absent
    fn read_optional(path: &Path) -> Option<String> {
        if !path.exists() {
            debug!(path = %path.display(), "Document file not present");
            return None;
        }
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read document file");
                None
            }
        }
    }
}
