//! In-memory tenant registry with a single active pointer.

use rio_core::entities::Tenant;
use rio_core::enums::{Plan, TenantStatus};

use crate::TenancyError;

#[derive(Debug, Clone, Default)]
pub struct TenantRegistry {
    tenants: Vec<Tenant>,
    active: Option<String>,
}

impl TenantRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tenant set. The active pointer is cleared.
    pub fn replace_all(&mut self, tenants: Vec<Tenant>) {
        self.tenants = tenants;
        self.active = None;
    }

    /// Tenants in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Tenant] {
        &self.tenants
    }

    #[must_use]
    pub fn get(&self, tenant_id: &str) -> Option<&Tenant> {
        self.tenants.iter().find(|t| t.id == tenant_id)
    }

    #[must_use]
    pub fn contains(&self, tenant_id: &str) -> bool {
        self.get(tenant_id).is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&Tenant> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    /// # Errors
    ///
    /// Returns `TenancyError::NotFound` for ids outside the registry.
    pub fn set_active(&mut self, tenant_id: &str) -> Result<&Tenant, TenancyError> {
        let index = self.index_of(tenant_id)?;
        self.active = Some(tenant_id.to_string());
        Ok(&self.tenants[index])
    }

    /// Append a tenant. Does not change the active pointer.
    ///
    /// # Errors
    ///
    /// Returns `TenancyError::Validation` if the id is already registered.
    pub fn insert(&mut self, tenant: Tenant) -> Result<(), TenancyError> {
        if self.contains(&tenant.id) {
            return Err(TenancyError::Validation(format!(
                "subdomain '{}' is already in use",
                tenant.id
            )));
        }
        self.tenants.push(tenant);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `TenancyError::NotFound` for ids outside the registry.
    pub fn set_status(
        &mut self,
        tenant_id: &str,
        status: TenantStatus,
    ) -> Result<&Tenant, TenancyError> {
        let index = self.index_of(tenant_id)?;
        self.tenants[index].status = status;
        Ok(&self.tenants[index])
    }

    /// # Errors
    ///
    /// Returns `TenancyError::NotFound` for ids outside the registry.
    pub fn set_plan(&mut self, tenant_id: &str, plan: Plan) -> Result<&Tenant, TenancyError> {
        let index = self.index_of(tenant_id)?;
        self.tenants[index].plan = plan;
        Ok(&self.tenants[index])
    }

    fn index_of(&self, tenant_id: &str) -> Result<usize, TenancyError> {
        self.tenants
            .iter()
            .position(|t| t.id == tenant_id)
            .ok_or_else(|| TenancyError::NotFound {
                tenant_id: tenant_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::backend::mock::seed_tenants;

    fn loaded() -> TenantRegistry {
        let mut registry = TenantRegistry::new();
        registry.replace_all(seed_tenants());
        registry
    }

    #[test]
    fn nothing_is_active_before_selection() {
        let registry = loaded();
        assert!(registry.active().is_none());
        assert_eq!(registry.list().len(), 3);
    }

    #[test]
    fn set_active_rejects_unknown_ids() {
        let mut registry = loaded();
        let err = registry.set_active("nowhere").expect_err("unknown id");
        assert!(matches!(err, TenancyError::NotFound { ref tenant_id } if tenant_id == "nowhere"));
        assert!(registry.active().is_none());
    }

    #[test]
    fn insert_keeps_order_and_rejects_duplicates() {
        let mut registry = loaded();
        let mut extra = registry.list()[0].clone();
        assert!(matches!(
            registry.insert(extra.clone()),
            Err(TenancyError::Validation(_))
        ));

        extra.id = "northside".into();
        registry.insert(extra).unwrap();
        let ids: Vec<&str> = registry.list().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["acmi", "global", "metro", "northside"]);
    }

    #[test]
    fn replace_all_clears_active_pointer() {
        let mut registry = loaded();
        registry.set_active("metro").unwrap();
        registry.replace_all(seed_tenants());
        assert!(registry.active().is_none());
    }
}
