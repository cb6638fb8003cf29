//! Hook and maintenance commands
//!
//! The hook commands are total: whatever stdin, environment, or filesystem
//! state they meet, they produce either an advisory string or nothing. The
//! maintenance commands (`validate`, `init-rules`) are ordinary fallible
//! tooling and report their problems.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use codelore_hooks::{
    ConfigLoader, DocumentValidator, HookDispatcher, HookError, HookEvent, HookStage, Result,
    RuleDocument, RuleTemplates,
};

/// Environment variable pointing at the plugin installation root
pub const PLUGIN_ROOT_ENV: &str = "CODELORE_PLUGIN_ROOT";

/// Rule document location relative to the plugin root
const RULES_FILE: &str = "hooks/skill-rules.json";

/// Outcome of linting a rule document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of rules in the document
    pub rules: usize,

    /// Lint warnings, empty when the document is clean
    pub warnings: Vec<String>,
}

/// Run one hook stage over raw stdin content
///
/// Returns the exact string to print to stdout, or `None` when there is
/// nothing to say — which covers malformed input, missing documents, and
/// prompts or paths that simply don't warrant an advisory.
pub fn run_hook(stage: HookStage, input: &str) -> Option<String> {
    let event = HookEvent::from_json(input)?;
    let config = ConfigLoader::load_activation();
    let document = load_rules_from_env();
    HookDispatcher::dispatch(stage, &event, &document, &config).map(|advisory| advisory.render())
}

/// Load the rule document from `CODELORE_PLUGIN_ROOT`
///
/// No plugin root means no rules, which the engine treats as "nothing can
/// match" — the silent no-op the hook contract asks for.
fn load_rules_from_env() -> RuleDocument {
    match env::var(PLUGIN_ROOT_ENV) {
        Ok(root) if !root.trim().is_empty() => ConfigLoader::load_rules(Path::new(&root)),
        _ => {
            debug!("No plugin root configured, using empty rule set");
            RuleDocument::default()
        }
    }
}

/// Lint a rule document, strictly
///
/// Resolution order: explicit path, then `CODELORE_PLUGIN_ROOT`. Unlike the
/// hook paths this surfaces unreadable and unparseable documents as errors,
/// since the whole point of `validate` is to see the problems.
pub fn run_validate(rules: Option<&Path>) -> Result<ValidationReport> {
    let path = match rules {
        Some(path) => path.to_path_buf(),
        None => rules_path_from_env().ok_or_else(|| {
            HookError::InvalidDocument(format!(
                "No rules file given and {PLUGIN_ROOT_ENV} is not set"
            ))
        })?,
    };

    let content = fs::read_to_string(&path)?;
    let document = ConfigLoader::parse_rules(&content)?;

    let mut warnings = DocumentValidator::validate(&document);
    let config = ConfigLoader::load_activation();
    warnings.extend(DocumentValidator::validate_activation(&config, &document));

    Ok(ValidationReport {
        rules: document.rules.len(),
        warnings,
    })
}

/// Write the starter rule document to `path`
///
/// Refuses to overwrite an existing file.
pub fn run_init_rules(path: &Path) -> Result<String> {
    if path.exists() {
        return Err(HookError::InvalidDocument(format!(
            "{} already exists",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, RuleTemplates::starter_json())?;
    Ok(format!("Wrote starter rule document to {}", path.display()))
}

fn rules_path_from_env() -> Option<PathBuf> {
    match env::var(PLUGIN_ROOT_ENV) {
        Ok(root) if !root.trim().is_empty() => Some(Path::new(&root).join(RULES_FILE)),
        _ => None,
    }
}
