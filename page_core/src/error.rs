//! Error types for the parsing boundary.
//!
//! Page handlers themselves are total: they never fail. Errors only show up
//! where free-form input enters the crate (mode labels, configuration JSON, recorded layouts).

use thiserror::Error;

/// A mode label that does not name any [`crate::MainSection`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown main section `{label}` (expected one of: nomofobia, almacenamiento, multimedia)")]
pub struct ParseModeError {
    /// The label as received.
    pub label: String,
}

/// Failure while loading a [`crate::PageConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("invalid page config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but a field holds an unusable value.
    #[error("invalid page config field `{field}`: {reason}")]
    Invalid {
        /// Field name as it appears in the JSON document.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },
}

/// Failure while loading a [`crate::LayoutSnapshot`].
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A section has geometry the tracker cannot place.
    #[error("invalid layout section `{id}`: {reason}")]
    Section { id: String, reason: &'static str },
}
