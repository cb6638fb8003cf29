//! Error types for the hook engine
//!
//! The engine is advisory by design: every failure class is recovered before
//! the process boundary, so these errors never escape to the host assistant.
//! They exist for the internal fallible steps (file IO, JSON parsing) and for
//! tooling such as `lore validate` that wants to report problems instead of
//! swallowing them.

use thiserror::Error;

/// Errors that can occur while loading or validating hook documents
#[derive(Debug, Error)]
pub enum HookError {
    /// The rule document or activation config is structurally invalid
    ///
    /// The string contains details about what is wrong with the document.
    /// Hook entry points recover from this by substituting defaults; only
    /// explicit tooling surfaces it.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// IO error reading a document file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error parsing a document or event payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for hook engine operations
pub type Result<T> = std::result::Result<T, HookError>;
