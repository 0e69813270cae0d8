//! In-process tenant backend.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use rio_core::entities::{Tenant, TenantDraft};
use rio_core::enums::{Plan, TenantStatus};

use super::TenantBackend;
use crate::TenancyError;

/// The three demo organizations the dashboard ships with.
#[must_use]
pub fn seed_tenants() -> Vec<Tenant> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Tenant {
            id: "acmi".into(),
            name: "ACMI Education".into(),
            subdomain: "acmi".into(),
            plan: Plan::Professional,
            status: TenantStatus::Active,
            user_count: 15,
            storage_used: "2.3GB".into(),
            compliance_score: 87,
            created_at: date(2023, 1, 15),
        },
        Tenant {
            id: "global".into(),
            name: "Global Skills Institute".into(),
            subdomain: "global".into(),
            plan: Plan::Enterprise,
            status: TenantStatus::Active,
            user_count: 42,
            storage_used: "5.1GB".into(),
            compliance_score: 92,
            created_at: date(2023, 3, 20),
        },
        Tenant {
            id: "metro".into(),
            name: "Metro College".into(),
            subdomain: "metro".into(),
            plan: Plan::Basic,
            status: TenantStatus::Trial,
            user_count: 8,
            storage_used: "1.2GB".into(),
            compliance_score: 78,
            created_at: date(2023, 6, 10),
        },
    ]
}

/// Seed-data backend with simulated latency and failure injection.
#[derive(Debug)]
pub struct MockTenantBackend {
    tenants: Mutex<Vec<Tenant>>,
    latency: Duration,
    context_latency: HashMap<String, Duration>,
    failing_contexts: HashSet<String>,
    context_log: Mutex<Vec<String>>,
}

impl Default for MockTenantBackend {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl MockTenantBackend {
    /// Seed tenants; every call waits `latency` first.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self::with_tenants(seed_tenants(), latency)
    }

    #[must_use]
    pub fn with_tenants(tenants: Vec<Tenant>, latency: Duration) -> Self {
        Self {
            tenants: Mutex::new(tenants),
            latency,
            context_latency: HashMap::new(),
            failing_contexts: HashSet::new(),
            context_log: Mutex::new(Vec::new()),
        }
    }

    /// Override the context-update latency for one tenant.
    #[must_use]
    pub fn with_context_latency(mut self, tenant_id: &str, latency: Duration) -> Self {
        self.context_latency.insert(tenant_id.to_string(), latency);
        self
    }

    /// Make context updates into `tenant_id` fail.
    #[must_use]
    pub fn failing_context_for(mut self, tenant_id: &str) -> Self {
        self.failing_contexts.insert(tenant_id.to_string());
        self
    }

    /// Tenant ids whose context update completed, in completion order.
    #[must_use]
    pub fn context_updates(&self) -> Vec<String> {
        self.context_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn simulate(latency: Duration) {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

impl TenantBackend for MockTenantBackend {
    async fn fetch_tenants(&self) -> Result<Vec<Tenant>, TenancyError> {
        Self::simulate(self.latency).await;
        Ok(self
            .tenants
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn save_tenant(&self, draft: &TenantDraft) -> Result<Tenant, TenancyError> {
        Self::simulate(self.latency).await;
        let tenant = Tenant::provision(draft, Utc::now().date_naive());

        let mut tenants = self.tenants.lock().unwrap_or_else(PoisonError::into_inner);
        if tenants.iter().any(|t| t.id == tenant.id) {
            return Err(TenancyError::Backend(format!(
                "tenant '{}' already exists",
                tenant.id
            )));
        }
        tenants.push(tenant.clone());
        Ok(tenant)
    }

    async fn update_context(&self, tenant_id: &str) -> Result<(), TenancyError> {
        let latency = self
            .context_latency
            .get(tenant_id)
            .copied()
            .unwrap_or(self.latency);
        Self::simulate(latency).await;

        if self.failing_contexts.contains(tenant_id) {
            return Err(TenancyError::Backend(format!(
                "context service rejected tenant '{tenant_id}'"
            )));
        }

        self.context_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tenant_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(subdomain: &str) -> TenantDraft {
        TenantDraft {
            name: "Northside TAFE".into(),
            subdomain: subdomain.into(),
            plan: Plan::Trial,
            admin_email: None,
            max_users: None,
            storage_limit: None,
        }
    }

    #[tokio::test]
    async fn saved_tenants_are_fetched_afterwards() {
        let backend = MockTenantBackend::default();
        let created = backend.save_tenant(&draft("northside")).await.unwrap();
        assert_eq!(created.storage_used, "0");

        let all = backend.fetch_tenants().await.unwrap();
        assert_eq!(all.last().map(|t| t.id.as_str()), Some("northside"));
    }

    #[tokio::test]
    async fn duplicate_save_is_a_backend_error() {
        let backend = MockTenantBackend::default();
        let err = backend.save_tenant(&draft("acmi")).await.unwrap_err();
        assert!(matches!(err, TenancyError::Backend(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_simulated() {
        let backend = MockTenantBackend::new(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        backend.fetch_tenants().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn injected_context_failure_is_not_logged() {
        let backend = MockTenantBackend::default().failing_context_for("metro");
        assert!(backend.update_context("metro").await.is_err());
        backend.update_context("acmi").await.unwrap();
        assert_eq!(backend.context_updates(), vec!["acmi".to_string()]);
    }
}
