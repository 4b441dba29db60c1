//! Unified error handling for the place-filter library.
//!
//! The taxonomy is deliberately small: a missing or unreadable dataset is
//! fatal at load time, and a render collaborator failure is passed through to
//! the caller untouched. Per-row data problems (malformed category fields,
//! unusable coordinates) are logged and tolerated instead of being errors —
//! one bad row must not take down a filter cycle.

use thiserror::Error;

/// Unified error type for place-filter operations.
#[derive(Debug, Clone, Error)]
pub enum PlaceFilterError {
    /// The backing dataset file is missing or cannot be read. Fatal: the UI
    /// must not initialize without a loaded row set.
    #[error("dataset unavailable at {path}: {reason}")]
    DataUnavailable { path: String, reason: String },

    /// A map or table collaborator failed to render. The interaction session
    /// does not catch this; it propagates to whoever drove the selection.
    #[error("render failed: {message}")]
    RenderFailed { message: String },
}

/// Result type alias for place-filter operations.
pub type Result<T> = std::result::Result<T, PlaceFilterError>;
