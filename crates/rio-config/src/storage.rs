//! Durable key-value storage location.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON storage file. Empty means the platform data dir.
    #[serde(default)]
    pub path: String,
}

impl StorageConfig {
    /// The configured path, or `<data_dir>/rio/storage.json`.
    #[must_use]
    pub fn resolved_path(&self) -> Option<std::path::PathBuf> {
        if self.path.is_empty() {
            dirs::data_dir().map(|dir| dir.join("rio").join("storage.json"))
        } else {
            Some(std::path::PathBuf::from(&self.path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = StorageConfig {
            path: "/tmp/rio.json".into(),
        };
        assert_eq!(
            config.resolved_path(),
            Some(std::path::PathBuf::from("/tmp/rio.json"))
        );
    }

    #[test]
    fn default_path_ends_in_storage_json() {
        if let Some(path) = StorageConfig::default().resolved_path() {
            assert!(path.ends_with("rio/storage.json"));
        }
    }
}
