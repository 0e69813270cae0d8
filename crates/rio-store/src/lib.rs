//! # rio-store
//!
//! The durable key-value boundary. Two keys are in use:
//! [`keys::DASHBOARD_WIDGETS`] (JSON array of widget ids) and
//! [`keys::CURRENT_TENANT`] (bare tenant id).
//!
//! Values are opaque strings; callers own their encoding. [`FileStore`]
//! keeps every key in one JSON object on disk, [`MemoryStore`] is the
//! in-process variant used by tests and dry runs.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Fixed storage key names.
pub mod keys {
    pub const DASHBOARD_WIDGETS: &str = "dashboardWidgets";
    pub const CURRENT_TENANT: &str = "currentTenant";
}

/// A process-wide string key-value store.
///
/// Implementations serialize their own writes; callers need no locking.
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
