//! Tenant backend and context-switch configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Which tenant backend to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-process seed data with simulated latency.
    #[default]
    Mock,
    /// JSON over HTTP against `api_url`.
    Http,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TenancyConfig {
    #[serde(default)]
    pub backend: BackendKind,

    /// Base URL of the tenant API (e.g., `https://api.example.com/v1`).
    #[serde(default)]
    pub api_url: String,

    /// Bearer token for the tenant API.
    #[serde(default)]
    pub api_token: String,

    /// Upper bound on a tenant switch, in milliseconds. `0` disables it.
    #[serde(default)]
    pub switch_timeout_ms: u64,

    /// Artificial latency for every mock backend call, in milliseconds.
    #[serde(default)]
    pub mock_latency_ms: u64,
}

impl TenancyConfig {
    #[must_use]
    pub const fn switch_timeout(&self) -> Option<Duration> {
        if self.switch_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.switch_timeout_ms))
        }
    }

    #[must_use]
    pub const fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the HTTP backend is selected
    /// without a usable `api_url`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == BackendKind::Http {
            if self.api_url.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "tenancy.api_url".into(),
                    reason: "required when tenancy.backend = \"http\"".into(),
                });
            }
            if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: "tenancy.api_url".into(),
                    reason: format!("'{}' is not an http(s) URL", self.api_url),
                });
            }
        }
        Ok(())
    }
}
