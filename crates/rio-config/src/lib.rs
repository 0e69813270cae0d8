//! # rio-config
//!
//! Layered configuration loading for RIO using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RIO_*` prefix, `__` as separator)
//! 2. Project-level `.rio/config.toml`
//! 3. User-level `~/.config/rio/config.toml`
//! 4. Built-in defaults
//!
//! `RIO_TENANCY__SWITCH_TIMEOUT_MS` maps to `tenancy.switch_timeout_ms`,
//! `RIO_STORAGE__PATH` to `storage.path`, and so on.

mod dashboard;
mod error;
mod general;
mod storage;
mod tenancy;

pub use dashboard::DashboardConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;
pub use tenancy::{BackendKind, TenancyConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RioConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub tenancy: TenancyConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RioConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; the binary loads it before calling this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a section is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".rio/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("RIO_").split("__"))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tenancy.validate()?;
        if !(self.dashboard.tile_height.is_finite() && self.dashboard.tile_height > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.tile_height".into(),
                reason: format!("must be a positive number, got {}", self.dashboard.tile_height),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rio").join("config.toml"))
    }
}
