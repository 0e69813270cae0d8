//! Entity structs for the RIO domain.
//!
//! All structs serialize camelCase and derive `JsonSchema` so exported
//! documents can be validated against a generated schema.

mod member;
mod tenant;

pub use member::{TaskStats, TeamMember};
pub use tenant::{Tenant, TenantDraft};
