use rio_config::{BackendKind, TenancyConfig};
use rio_core::entities::{Tenant, TenantDraft};
use rio_tenancy::TenancyError;
use rio_tenancy::backend::TenantBackend;
use rio_tenancy::backend::http::HttpTenantBackend;
use rio_tenancy::backend::mock::MockTenantBackend;

/// The tenant backend selected by `tenancy.backend`.
pub enum AnyBackend {
    Mock(MockTenantBackend),
    Http(HttpTenantBackend),
}

impl AnyBackend {
    #[must_use]
    pub fn from_config(config: &TenancyConfig) -> Self {
        match config.backend {
            BackendKind::Mock => Self::Mock(MockTenantBackend::new(config.mock_latency())),
            BackendKind::Http => {
                let token = Some(config.api_token.clone());
                Self::Http(HttpTenantBackend::new(&config.api_url, token))
            }
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Mock(_) => "mock",
            Self::Http(_) => "http",
        }
    }
}

impl TenantBackend for AnyBackend {
    async fn fetch_tenants(&self) -> Result<Vec<Tenant>, TenancyError> {
        match self {
            Self::Mock(backend) => backend.fetch_tenants().await,
            Self::Http(backend) => backend.fetch_tenants().await,
        }
    }

    async fn save_tenant(&self, draft: &TenantDraft) -> Result<Tenant, TenancyError> {
        match self {
            Self::Mock(backend) => backend.save_tenant(draft).await,
            Self::Http(backend) => backend.save_tenant(draft).await,
        }
    }

    async fn update_context(&self, tenant_id: &str) -> Result<(), TenancyError> {
        match self {
            Self::Mock(backend) => backend.update_context(tenant_id).await,
            Self::Http(backend) => backend.update_context(tenant_id).await,
        }
    }
}
