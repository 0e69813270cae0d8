use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file exists but is not a JSON object.
    #[error("storage file {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("storage lock poisoned")]
    Poisoned,
}
