//! Re-reads tenant metrics for the dashboard on every tenant change.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use rio_core::entities::Tenant;
use rio_core::enums::Plan;
use rio_tenancy::TenantObserver;
use serde::Serialize;

/// What the dashboard shows for the active tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub tenant_id: String,
    pub tenant_name: String,
    pub plan: Plan,
    pub compliance_score: u8,
    pub user_count: u32,
    pub storage_used: String,
    pub refreshed_at: DateTime<Utc>,
    /// Number of refreshes since construction.
    pub refresh_count: u64,
}

/// Observer handed to the tenant context at startup.
#[derive(Debug, Default)]
pub struct DashboardRefresher {
    state: Mutex<Option<DashboardState>>,
}

impl DashboardRefresher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last refresh, or `None` if no tenant has been seen yet.
    #[must_use]
    pub fn state(&self) -> Option<DashboardState> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TenantObserver for DashboardRefresher {
    fn tenant_changed(&self, tenant: &Tenant) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let refresh_count = state.as_ref().map_or(0, |s| s.refresh_count) + 1;
        *state = Some(DashboardState {
            tenant_id: tenant.id.clone(),
            tenant_name: tenant.name.clone(),
            plan: tenant.plan,
            compliance_score: tenant.compliance_score,
            user_count: tenant.user_count,
            storage_used: tenant.storage_used.clone(),
            refreshed_at: Utc::now(),
            refresh_count,
        });
        tracing::debug!(tenant_id = %tenant.id, refresh_count, "dashboard refreshed");
    }
}
