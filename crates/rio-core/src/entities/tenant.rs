use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Plan, TenantStatus};
use crate::errors::CoreError;

/// One customer organization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub subdomain: String,
    pub plan: Plan,
    pub status: TenantStatus,
    pub user_count: u32,
    pub storage_used: String,
    /// Percentage in `0..=100`.
    pub compliance_score: u8,
    pub created_at: NaiveDate,
}

impl Tenant {
    /// Build the tenant a fresh creation request produces.
    ///
    /// New tenants start active with a single (admin) user, no storage, and a
    /// zero compliance score. The subdomain becomes the id.
    #[must_use]
    pub fn provision(draft: &TenantDraft, today: NaiveDate) -> Self {
        Self {
            id: draft.subdomain.trim().to_string(),
            name: draft.name.trim().to_string(),
            subdomain: draft.subdomain.trim().to_string(),
            plan: draft.plan,
            status: TenantStatus::Active,
            user_count: 1,
            storage_used: "0".into(),
            compliance_score: 0,
            created_at: today,
        }
    }

    /// Range checks for tenants that arrive from outside the process.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the compliance score exceeds 100.
    pub fn check_bounds(&self) -> Result<(), CoreError> {
        if self.compliance_score > 100 {
            return Err(CoreError::Validation(format!(
                "tenant '{}' has compliance score {}, expected 0..=100",
                self.id, self.compliance_score
            )));
        }
        Ok(())
    }
}

/// Tenant creation request, as submitted from the add-organization form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TenantDraft {
    pub name: String,
    pub subdomain: String,
    pub plan: Plan,
    #[serde(default)]
    pub admin_email: Option<String>,
    #[serde(default)]
    pub max_users: Option<u32>,
    #[serde(default)]
    pub storage_limit: Option<String>,
}

impl TenantDraft {
    /// Shape checks that need no registry access.
    ///
    /// Uniqueness of the subdomain is checked by the registry.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` describing the first bad field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("tenant name must not be empty".into()));
        }

        let subdomain = self.subdomain.trim();
        if subdomain.is_empty() {
            return Err(CoreError::Validation("subdomain must not be empty".into()));
        }
        if !is_dns_label(subdomain) {
            return Err(CoreError::Validation(format!(
                "subdomain '{subdomain}' must be lowercase letters, digits, or '-', \
                 and must not start or end with '-'"
            )));
        }

        if let Some(email) = self.admin_email.as_deref() {
            let email = email.trim();
            if !email.is_empty() && !looks_like_email(email) {
                return Err(CoreError::Validation(format!(
                    "admin email '{email}' is not a valid address"
                )));
            }
        }

        if self.max_users == Some(0) {
            return Err(CoreError::Validation("max users must be at least 1".into()));
        }

        Ok(())
    }
}

fn is_dns_label(value: &str) -> bool {
    value.len() <= 63
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}
