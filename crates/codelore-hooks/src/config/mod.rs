//! Document loading, validation, and templates
//!
//! Both external documents (the rule document and the activation config) are
//! hand-authored JSON. Loading is tolerant by contract: an absent file means
//! defaults, a malformed file means defaults plus a warning, and neither is
//! ever an error at the hook entry points. The validator is a separate lint
//! pass for tooling that wants the warnings surfaced instead of logged.

pub mod loader;
pub mod templates;
pub mod validator;

pub use loader::ConfigLoader;
pub use templates::RuleTemplates;
pub use validator::DocumentValidator;
