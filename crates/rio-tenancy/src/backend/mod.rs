//! The tenant API boundary.
//!
//! The context consumes a [`TenantBackend`]; it never owns the transport.
//! [`mock::MockTenantBackend`] serves seed data with controllable latency,
//! [`http::HttpTenantBackend`] talks JSON over HTTP.

pub mod http;
pub mod mock;

use std::future::Future;

use rio_core::entities::{Tenant, TenantDraft};

use crate::TenancyError;

pub trait TenantBackend: Send + Sync {
    /// All tenants visible to the current user.
    fn fetch_tenants(&self) -> impl Future<Output = Result<Vec<Tenant>, TenancyError>> + Send;

    /// Create a tenant from a validated draft.
    fn save_tenant(
        &self,
        draft: &TenantDraft,
    ) -> impl Future<Output = Result<Tenant, TenancyError>> + Send;

    /// Move the server-side session into `tenant_id`.
    fn update_context(
        &self,
        tenant_id: &str,
    ) -> impl Future<Output = Result<(), TenancyError>> + Send;
}
