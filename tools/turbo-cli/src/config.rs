//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_commerce::search::DEFAULT_PAGE_SIZE;
use turbo_store::{StoreConfig, DEFAULT_CATALOG_URL};

/// Environment variable overriding `catalog.base_url`.
pub const BASE_URL_ENV: &str = "TURBO_SHOP_BASE_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog service settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Product store settings.
    #[serde(default)]
    pub store: StoreSection,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply environment variable overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Replace the catalog base URL when an override is given.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.catalog.base_url = url.trim().to_string();
        }
        self
    }

    /// Settings for the product store.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            page_size: self.catalog.page_size.max(1),
            discard_stale_responses: self.store.discard_stale_responses,
        }
    }
}

/// Catalog service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Products per page for unfiltered listing.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

fn default_base_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Product store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSection {
    /// Drop results of fetches superseded by a newer one.
    #[serde(default = "default_true")]
    pub discard_stale_responses: bool,
}

fn default_true() -> bool {
    true
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            discard_stale_responses: true,
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines (for log aggregation).
    Json,
    /// Human-readable (for development).
    #[default]
    Human,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.catalog.base_url, "https://dummyjson.com");
        assert_eq!(config.catalog.page_size, 10);
        assert!(config.store.discard_stale_responses);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_load_partial_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[catalog]
base_url = "http://localhost:3000"

[store]
discard_stale_responses = false

[logging]
format = "json"
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:3000");
        assert_eq!(config.catalog.page_size, 10);
        assert_eq!(config.catalog.timeout_secs, 10);
        assert!(!config.store.discard_stale_responses);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"catalog": {{"page_size": 24}}}}"#).unwrap();

        let config = CliConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.store_config().page_size, 24);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[catalog\nbase_url = ").unwrap();
        assert!(CliConfig::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_base_url_override() {
        let config = CliConfig::default().with_base_url_override(Some(" http://mock ".to_string()));
        assert_eq!(config.catalog.base_url, "http://mock");

        let config = CliConfig::default().with_base_url_override(Some(String::new()));
        assert_eq!(config.catalog.base_url, "https://dummyjson.com");
    }

    #[test]
    fn test_store_config_clamps_page_size() {
        let mut config = CliConfig::default();
        config.catalog.page_size = 0;
        assert_eq!(config.store_config().page_size, 1);
    }
}
