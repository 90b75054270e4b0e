//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use turbo_store::{HttpCatalog, Storefront};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, from the cwd upwards.
const CONFIG_NAMES: [&str; 3] = ["turbo-shop.toml", ".turbo-shop.toml", "turbo-shop.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from an explicit config file or the nearest discovered one.
    pub fn load(config_path: Option<&str>, base_url: Option<String>, output: Output) -> Result<Self> {
        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                find_config(&cwd)?.unwrap_or_default()
            }
        };

        let config = config.with_env_overrides().with_base_url_override(base_url);
        Ok(Self { config, output })
    }

    /// HTTP catalog client for the configured service.
    pub fn catalog(&self) -> HttpCatalog {
        HttpCatalog::new(&self.config.catalog.base_url).with_timeout(self.config.catalog.timeout())
    }

    /// A fresh storefront over the configured catalog.
    pub fn storefront(&self) -> Storefront<HttpCatalog> {
        Storefront::with_config(self.catalog(), self.config.store_config())
    }
}

/// Find a config file in the directory tree.
///
/// The nearest file wins; if it does not parse, that is an error rather than
/// a silent fall back to defaults.
fn find_config(start: &Path) -> Result<Option<CliConfig>> {
    let mut current = PathBuf::from(start);
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                let path = config_path.to_string_lossy();
                let config = CliConfig::load(&path)
                    .with_context(|| format!("Invalid config file {}", path))?;
                return Ok(Some(config));
            }
        }

        if !current.pop() {
            return Ok(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("turbo-shop.toml"),
            "[catalog]\npage_size = 5\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = find_config(&nested).unwrap().unwrap();
        assert_eq!(config.catalog.page_size, 5);
    }

    #[test]
    fn test_malformed_discovered_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turbo-shop.toml");
        std::fs::write(&path, "[catalog\npage_size = \"five\"\n").unwrap();

        let err = find_config(dir.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Invalid config file"));
        assert!(message.contains("turbo-shop.toml"));
    }

    #[test]
    fn test_cli_base_url_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(&path, "[catalog]\nbase_url = \"http://from-file\"\n").unwrap();

        let ctx = Context::load(
            path.to_str(),
            Some("http://from-flag".to_string()),
            Output::new(false, true),
        )
        .unwrap();
        assert_eq!(ctx.config.catalog.base_url, "http://from-flag");
        assert_eq!(
            ctx.catalog().url_for(&Default::default()),
            "http://from-flag/products?limit=10&skip=0"
        );
    }
}
