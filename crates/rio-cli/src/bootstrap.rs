use std::path::Path;

use anyhow::Context;
use rio_config::RioConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config, then apply flag overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RioConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv(&cwd)?;

    let mut config = RioConfig::load().context("failed to load rio configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn load_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

fn apply_overrides(config: &mut RioConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.storage {
        config.storage.path.clone_from(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(storage: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            storage: storage.map(String::from),
        }
    }

    #[test]
    fn storage_flag_overrides_config() {
        let mut config = RioConfig::default();
        config.storage.path = "/etc/rio/storage.json".into();
        apply_overrides(&mut config, &flags(Some("/tmp/rio.json")));
        assert_eq!(config.storage.path, "/tmp/rio.json");
    }

    #[test]
    fn dotenv_in_directory_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "RIO_BOOTSTRAP_DOTENV_MARKER=loaded\n").unwrap();
        load_dotenv(dir.path()).unwrap();
        assert_eq!(
            std::env::var("RIO_BOOTSTRAP_DOTENV_MARKER").as_deref(),
            Ok("loaded")
        );
    }

    #[test]
    fn missing_dotenv_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dotenv(dir.path()).is_ok());
    }

    #[test]
    fn missing_flag_keeps_config() {
        let mut config = RioConfig::default();
        config.storage.path = "/etc/rio/storage.json".into();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.storage.path, "/etc/rio/storage.json");
    }
}
