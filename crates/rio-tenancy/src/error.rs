use rio_core::CoreError;
use rio_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenancyError {
    #[error("tenant not found: {tenant_id}")]
    NotFound { tenant_id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend rejected the context update, or the tenant cannot be entered.
    #[error("failed to switch to tenant {tenant_id}: {reason}")]
    SwitchFailed { tenant_id: String, reason: String },

    #[error("switching to tenant {tenant_id} timed out after {timeout_ms} ms")]
    SwitchTimeout { tenant_id: String, timeout_ms: u64 },

    #[error("tenant backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CoreError> for TenancyError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound { id, .. } => Self::NotFound { tenant_id: id },
            CoreError::Validation(message) => Self::Validation(message),
            other => Self::Backend(other.to_string()),
        }
    }
}
