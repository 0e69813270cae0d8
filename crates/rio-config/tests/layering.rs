//! Integration tests for TOML + environment layering.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use rio_config::{BackendKind, RioConfig};

#[test]
fn loads_tenancy_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[tenancy]
backend = "http"
api_url = "https://tenants.example.com/v1"
api_token = "tok"
switch_timeout_ms = 3000
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(RioConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = RioConfig::from_figment(&figment).expect("config should load");

        assert_eq!(config.tenancy.backend, BackendKind::Http);
        assert_eq!(config.tenancy.api_url, "https://tenants.example.com/v1");
        assert_eq!(config.tenancy.switch_timeout_ms, 3000);
        assert_eq!(config.tenancy.mock_latency_ms, 0);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[dashboard]
tile_height = 80.0
"#,
        )?;
        jail.set_env("RIO_DASHBOARD__TILE_HEIGHT", "150.0");
        jail.set_env("RIO_STORAGE__PATH", "/var/lib/rio/storage.json");

        let figment = Figment::from(Serialized::defaults(RioConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("RIO_").split("__"));
        let config = RioConfig::from_figment(&figment).expect("config should load");

        assert!((config.dashboard.tile_height - 150.0).abs() < f64::EPSILON);
        assert_eq!(config.storage.path, "/var/lib/rio/storage.json");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rio")?;
        jail.create_file(
            ".rio/config.toml",
            r#"
[dashboard]
default_widgets = ["task-status", "compliance-trend"]
"#,
        )?;

        let config = RioConfig::load().expect("config should load");
        assert_eq!(
            config.dashboard.default_widgets,
            vec!["task-status".to_string(), "compliance-trend".to_string()]
        );
        Ok(())
    });
}

#[test]
fn http_backend_without_url_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("RIO_TENANCY__BACKEND", "http");
        let figment = Figment::from(Serialized::defaults(RioConfig::default()))
            .merge(Env::prefixed("RIO_").split("__"));
        assert!(RioConfig::from_figment(&figment).is_err());
        Ok(())
    });
}
