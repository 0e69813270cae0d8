//! Cross-cutting error types for RIO.
//!
//! Crate-specific failures (`StoreError`, `TenancyError`) live in their own
//! crates. The binary converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any RIO crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation (format, uniqueness, range).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A bulk action name that the directory does not know.
    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),

    /// A status change that the state machine does not allow.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a missing team member.
    #[must_use]
    pub fn member_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "team member".into(),
            id: id.into(),
        }
    }
}
