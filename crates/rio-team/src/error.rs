use std::path::PathBuf;

use rio_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TeamError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to write export {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TeamError {
    /// The underlying core error, if this is one.
    #[must_use]
    pub const fn as_core(&self) -> Option<&CoreError> {
        match self {
            Self::Core(error) => Some(error),
            _ => None,
        }
    }
}
