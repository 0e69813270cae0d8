//! JSON-over-HTTP tenant backend.
//!
//! Endpoints, relative to the configured base URL:
//! - `GET  /tenants` → `[Tenant]`
//! - `POST /tenants` with a `TenantDraft` body → `Tenant`
//! - `PUT  /tenants/{id}/context` → any 2xx

use rio_core::entities::{Tenant, TenantDraft};

use super::TenantBackend;
use crate::TenancyError;

#[derive(Debug, Clone)]
pub struct HttpTenantBackend {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTenantBackend {
    #[must_use]
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    fn tenants_url(&self) -> String {
        format!("{}/tenants", self.base_url)
    }

    fn context_url(&self, tenant_id: &str) -> String {
        format!(
            "{}/tenants/{}/context",
            self.base_url,
            urlencoding::encode(tenant_id)
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Map non-success statuses to `TenancyError`.
///
/// 404 becomes `NotFound` for `tenant_id` when one is given, 400/409/422
/// become `Validation` carrying the response body.
async fn check_response(
    resp: reqwest::Response,
    tenant_id: Option<&str>,
) -> Result<reqwest::Response, TenancyError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    match (status.as_u16(), tenant_id) {
        (404, Some(id)) => Err(TenancyError::NotFound {
            tenant_id: id.to_string(),
        }),
        (400 | 409 | 422, _) => Err(TenancyError::Validation(body)),
        (code, _) => Err(TenancyError::Backend(format!("HTTP {code}: {body}"))),
    }
}

/// Reject payloads whose fields fall outside their documented ranges.
fn checked(tenant: Tenant) -> Result<Tenant, TenancyError> {
    tenant
        .check_bounds()
        .map_err(|e| TenancyError::Backend(format!("invalid tenant payload: {e}")))?;
    Ok(tenant)
}

impl TenantBackend for HttpTenantBackend {
    async fn fetch_tenants(&self) -> Result<Vec<Tenant>, TenancyError> {
        let resp = self
            .authorize(self.client.get(self.tenants_url()))
            .send()
            .await
            .map_err(|e| TenancyError::Backend(format!("fetch tenants: {e}")))?;

        let tenants: Vec<Tenant> = check_response(resp, None)
            .await?
            .json()
            .await
            .map_err(|e| TenancyError::Backend(format!("parse tenants: {e}")))?;
        tenants.into_iter().map(checked).collect()
    }

    async fn save_tenant(&self, draft: &TenantDraft) -> Result<Tenant, TenancyError> {
        let resp = self
            .authorize(self.client.post(self.tenants_url()).json(draft))
            .send()
            .await
            .map_err(|e| TenancyError::Backend(format!("save tenant: {e}")))?;

        let tenant: Tenant = check_response(resp, None)
            .await?
            .json()
            .await
            .map_err(|e| TenancyError::Backend(format!("parse tenant: {e}")))?;
        checked(tenant)
    }

    async fn update_context(&self, tenant_id: &str) -> Result<(), TenancyError> {
        let resp = self
            .authorize(self.client.put(self.context_url(tenant_id)))
            .send()
            .await
            .map_err(|e| TenancyError::Backend(format!("update context: {e}")))?;

        check_response(resp, Some(tenant_id)).await.map(|_| ())
    }
}
