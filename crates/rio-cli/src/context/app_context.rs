use std::sync::Arc;

use anyhow::Context;
use rio_config::RioConfig;
use rio_dashboard::{DashboardRefresher, LayoutStore};
use rio_store::{FileStore, KeyValueStore};
use rio_team::TeamDirectory;
use rio_team::seed::seed_members;
use rio_tenancy::TenantContext;

use crate::context::AnyBackend;

/// Components constructed once at startup and handed to command handlers.
pub struct AppContext {
    pub config: RioConfig,
    pub tenants: TenantContext<AnyBackend>,
    pub team: TeamDirectory,
    pub layout: LayoutStore,
    pub refresher: Arc<DashboardRefresher>,
}

impl AppContext {
    /// Wire the store, backend, observers, and directories together.
    ///
    /// Tenants are not fetched here; tenant commands call
    /// [`Self::load_tenants`] so that layout edits work offline.
    pub fn init(config: RioConfig) -> anyhow::Result<Self> {
        let storage_path = config
            .storage
            .resolved_path()
            .context("no storage path configured and no platform data directory found")?;
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&storage_path));

        let backend = AnyBackend::from_config(&config.tenancy);
        tracing::debug!(backend = backend.kind(), storage = %storage_path.display(), "initializing");

        let refresher = Arc::new(DashboardRefresher::new());
        let tenants = TenantContext::new(backend, Arc::clone(&store))
            .with_observer(refresher.clone())
            .with_switch_timeout(config.tenancy.switch_timeout());

        let layout =
            LayoutStore::new(store).with_defaults(config.dashboard.default_widgets.clone());

        Ok(Self {
            config,
            tenants,
            team: TeamDirectory::new(seed_members()),
            layout,
            refresher,
        })
    }

    /// Fetch tenants and restore the persisted active tenant.
    pub async fn load_tenants(&self) -> anyhow::Result<()> {
        self.tenants
            .load()
            .await
            .context("failed to load tenants")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config_in(dir: &std::path::Path) -> RioConfig {
        let mut config = RioConfig::default();
        config.storage.path = dir.join("storage.json").display().to_string();
        config
    }

    #[tokio::test]
    async fn switch_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();

        let ctx = AppContext::init(config_in(dir.path())).unwrap();
        ctx.load_tenants().await.unwrap();
        ctx.tenants.switch_active("global").await.unwrap();

        let restarted = AppContext::init(config_in(dir.path())).unwrap();
        restarted.load_tenants().await.unwrap();
        assert_eq!(restarted.tenants.active_tenant().unwrap().id, "global");
        assert_eq!(restarted.refresher.state().unwrap().tenant_id, "global");
    }

    #[test]
    fn layout_defaults_come_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::init(config_in(dir.path())).unwrap();
        assert_eq!(
            ctx.layout.current().widgets(),
            RioConfig::default().dashboard.default_widgets
        );
    }
}
