//! Tenant context: the registry plus the orchestration around switching.
//!
//! Switch requests are serialized. A FIFO gate is held from lookup until the
//! observers have been notified, so a second request waits for the first one
//! to settle and the most recent request decides the final active tenant.
//! The registry lock is never held across an await point.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use rio_core::entities::{Tenant, TenantDraft};
use rio_core::enums::{Plan, TenantStatus};
use rio_store::{KeyValueStore, keys};

use crate::backend::TenantBackend;
use crate::observer::TenantObserver;
use crate::registry::TenantRegistry;
use crate::TenancyError;

/// A typed request against the tenant context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantCommand {
    Switch { tenant_id: String },
    Create(TenantDraft),
    Suspend { tenant_id: String },
    ChangePlan { tenant_id: String, plan: Plan },
}

/// What a [`TenantCommand`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantEvent {
    Switched(Tenant),
    Created(Tenant),
    Suspended(Tenant),
    PlanChanged(Tenant),
}

impl TenantEvent {
    #[must_use]
    pub const fn tenant(&self) -> &Tenant {
        match self {
            Self::Switched(t) | Self::Created(t) | Self::Suspended(t) | Self::PlanChanged(t) => t,
        }
    }
}

pub struct TenantContext<B> {
    backend: B,
    store: Arc<dyn KeyValueStore>,
    registry: RwLock<TenantRegistry>,
    switch_gate: tokio::sync::Mutex<()>,
    observers: Vec<Arc<dyn TenantObserver>>,
    switch_timeout: Option<Duration>,
}

impl<B: TenantBackend> TenantContext<B> {
    #[must_use]
    pub fn new(backend: B, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            store,
            registry: RwLock::new(TenantRegistry::new()),
            switch_gate: tokio::sync::Mutex::new(()),
            observers: Vec::new(),
            switch_timeout: None,
        }
    }

    /// Register a dependent to notify on every active-tenant change.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn TenantObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Bound the backend context update. `None` waits indefinitely.
    #[must_use]
    pub const fn with_switch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.switch_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch tenants and pick the active one.
    ///
    /// The persisted tenant id wins if it is still known; otherwise the
    /// first tenant becomes active. Observers are notified with the result.
    ///
    /// # Errors
    ///
    /// Returns `TenancyError::Backend` if the tenant fetch fails.
    pub async fn load(&self) -> Result<Option<Tenant>, TenancyError> {
        let _gate = self.switch_gate.lock().await;
        let tenants = self.backend.fetch_tenants().await?;

        let persisted = match self.store.get(keys::CURRENT_TENANT) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(%error, "could not read persisted tenant; using first tenant");
                None
            }
        };

        let active = {
            let mut registry = self.write_registry();
            registry.replace_all(tenants);
            let chosen = persisted
                .filter(|id| registry.contains(id))
                .or_else(|| registry.list().first().map(|t| t.id.clone()));
            match chosen {
                Some(id) => Some(registry.set_active(&id)?.clone()),
                None => None,
            }
        };

        match &active {
            Some(tenant) => {
                tracing::info!(tenant_id = %tenant.id, count = self.list_tenants().len(), "tenants loaded");
                self.notify(tenant);
            }
            None => tracing::warn!("tenant backend returned no tenants"),
        }
        Ok(active)
    }

    /// All known tenants, insertion order.
    #[must_use]
    pub fn list_tenants(&self) -> Vec<Tenant> {
        self.read_registry().list().to_vec()
    }

    /// The active tenant; `None` only before [`Self::load`] completes.
    #[must_use]
    pub fn active_tenant(&self) -> Option<Tenant> {
        self.read_registry().active().cloned()
    }

    #[must_use]
    pub fn tenant(&self, tenant_id: &str) -> Option<Tenant> {
        self.read_registry().get(tenant_id).cloned()
    }

    /// Make `tenant_id` the active tenant.
    ///
    /// The backend context update resolves first; only then is the id
    /// persisted, the active pointer moved, and the observers notified.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is not registered
    /// - `SwitchFailed` if the tenant is suspended or the backend refuses
    /// - `SwitchTimeout` if the configured timeout elapses
    /// - `Store` if the choice cannot be persisted
    pub async fn switch_active(&self, tenant_id: &str) -> Result<Tenant, TenancyError> {
        let _gate = self.switch_gate.lock().await;

        let tenant = self.tenant(tenant_id).ok_or_else(|| TenancyError::NotFound {
            tenant_id: tenant_id.to_string(),
        })?;

        if tenant.status == TenantStatus::Suspended {
            return Err(TenancyError::SwitchFailed {
                tenant_id: tenant_id.to_string(),
                reason: "tenant is suspended".into(),
            });
        }

        tracing::debug!(tenant_id, "updating tenant context");
        self.update_context(tenant_id).await?;

        // Suspend does not take the gate; the status may have changed during the await.
        let tenant = {
            let mut registry = self.write_registry();
            let status = registry.get(tenant_id).map(|t| t.status).ok_or_else(|| {
                TenancyError::NotFound {
                    tenant_id: tenant_id.to_string(),
                }
            })?;
            if status == TenantStatus::Suspended {
                tracing::warn!(tenant_id, "tenant suspended during context update");
                return Err(TenancyError::SwitchFailed {
                    tenant_id: tenant_id.to_string(),
                    reason: "tenant was suspended while switching".into(),
                });
            }
            self.store.set(keys::CURRENT_TENANT, tenant_id)?;
            registry.set_active(tenant_id)?.clone()
        };

        self.notify(&tenant);
        tracing::info!(tenant_id, name = %tenant.name, "switched tenant");
        Ok(tenant)
    }

    /// Validate a draft, have the backend create it, and register it.
    /// The new tenant is not activated.
    ///
    /// # Errors
    ///
    /// Returns `TenancyError::Validation` for a malformed draft or a
    /// subdomain that matches an existing tenant id, and `Backend` if the
    /// backend call fails.
    pub async fn create_tenant(&self, draft: TenantDraft) -> Result<Tenant, TenancyError> {
        draft.validate()?;

        let subdomain = draft.subdomain.trim();
        if self.read_registry().contains(subdomain) {
            return Err(TenancyError::Validation(format!(
                "subdomain '{subdomain}' is already in use"
            )));
        }

        let tenant = self.backend.save_tenant(&draft).await?;
        self.write_registry().insert(tenant.clone())?;

        tracing::info!(tenant_id = %tenant.id, plan = %tenant.plan, "tenant created");
        Ok(tenant)
    }

    /// # Errors
    ///
    /// Returns `TenancyError::NotFound` for unknown ids.
    pub fn suspend_tenant(&self, tenant_id: &str) -> Result<Tenant, TenancyError> {
        let mut registry = self.write_registry();
        let is_active = registry.active().is_some_and(|t| t.id == tenant_id);
        let tenant = registry
            .set_status(tenant_id, TenantStatus::Suspended)?
            .clone();
        if is_active {
            tracing::warn!(tenant_id, "suspended the active tenant");
        } else {
            tracing::info!(tenant_id, "tenant suspended");
        }
        Ok(tenant)
    }

    /// # Errors
    ///
    /// Returns `TenancyError::NotFound` for unknown ids.
    pub fn update_tenant_plan(&self, tenant_id: &str, plan: Plan) -> Result<Tenant, TenancyError> {
        let tenant = self.write_registry().set_plan(tenant_id, plan)?.clone();
        tracing::info!(tenant_id, %plan, "tenant plan updated");
        Ok(tenant)
    }

    /// Dispatch a typed command.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub async fn execute(&self, command: TenantCommand) -> Result<TenantEvent, TenancyError> {
        match command {
            TenantCommand::Switch { tenant_id } => {
                self.switch_active(&tenant_id).await.map(TenantEvent::Switched)
            }
            TenantCommand::Create(draft) => {
                self.create_tenant(draft).await.map(TenantEvent::Created)
            }
            TenantCommand::Suspend { tenant_id } => {
                self.suspend_tenant(&tenant_id).map(TenantEvent::Suspended)
            }
            TenantCommand::ChangePlan { tenant_id, plan } => self
                .update_tenant_plan(&tenant_id, plan)
                .map(TenantEvent::PlanChanged),
        }
    }

    async fn update_context(&self, tenant_id: &str) -> Result<(), TenancyError> {
        let update = self.backend.update_context(tenant_id);
        let result = match self.switch_timeout {
            Some(limit) => tokio::time::timeout(limit, update).await.map_err(|_| {
                TenancyError::SwitchTimeout {
                    tenant_id: tenant_id.to_string(),
                    timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                }
            })?,
            None => update.await,
        };

        result.map_err(|error| match error {
            TenancyError::NotFound { .. } => error,
            other => TenancyError::SwitchFailed {
                tenant_id: tenant_id.to_string(),
                reason: other.to_string(),
            },
        })
    }

    fn notify(&self, tenant: &Tenant) {
        for observer in &self.observers {
            observer.tenant_changed(tenant);
        }
    }

    fn read_registry(&self) -> RwLockReadGuard<'_, TenantRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_registry(&self) -> RwLockWriteGuard<'_, TenantRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}
