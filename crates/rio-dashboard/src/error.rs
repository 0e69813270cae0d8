use rio_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("layout serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no widget at position {index} (layout has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
