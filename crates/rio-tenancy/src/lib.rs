//! # rio-tenancy
//!
//! Tenant registry and context switching.
//!
//! [`TenantContext`] owns the registry, consumes a [`backend::TenantBackend`]
//! for all remote calls, persists the active tenant id through a
//! [`rio_store::KeyValueStore`], and notifies registered
//! [`TenantObserver`]s after every change. Dependencies are passed in at
//! construction; nothing here reaches for global state.

pub mod backend;
pub mod context;
pub mod error;
pub mod observer;
pub mod registry;

pub use context::{TenantCommand, TenantContext, TenantEvent};
pub use error::TenancyError;
pub use observer::TenantObserver;
pub use registry::TenantRegistry;
