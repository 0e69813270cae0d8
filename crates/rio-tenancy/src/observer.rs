use rio_core::entities::Tenant;

/// A dependent that must refresh when the active tenant changes.
///
/// Observers are handed to the context at construction time and called
/// synchronously after every successful switch and after the initial load.
pub trait TenantObserver: Send + Sync {
    fn tenant_changed(&self, tenant: &Tenant);
}
