//! # rio-core
//!
//! Core types shared by every RIO crate.
//!
//! - Entity structs for tenants and team members
//! - Status enums with transition tables
//! - The static role template table and permission resolver
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod roles;

pub use errors::CoreError;
