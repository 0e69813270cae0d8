//! # rio-team
//!
//! The tenant's team directory. Holds the member roster with the current
//! filter set and provides search, bulk actions, per-member access
//! overrides, and JSON export snapshots.

pub mod directory;
pub mod error;
pub mod export;
pub mod filters;
pub mod seed;

pub use directory::{BulkOutcome, TeamCommand, TeamDirectory, TeamEvent};
pub use error::TeamError;
pub use export::ExportSnapshot;
pub use filters::{MemberFilters, MemberFiltersBuilder};
