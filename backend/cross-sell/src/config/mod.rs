use crate::catalog::{Catalog, CatalogError};
use crate::models::DEFAULT_MAX_ITEMS;
use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Upper bound on `max_items`; the recommendation panel never shows more.
const MAX_ITEMS_LIMIT: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Default result limit for requests that don't set one
    pub max_items: usize,
    /// JSON catalog to load instead of the bundled one
    pub catalog_path: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            catalog_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `CROSS_SELL__*` environment variables (and `.env`).
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("max_items", DEFAULT_MAX_ITEMS as u64)?
            .set_default("log_level", "info")?
            .add_source(
                config::Environment::with_prefix("CROSS_SELL")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Apply a command-line limit; `validate` caps it like the env value.
    pub fn with_max_items(mut self, max_items: Option<usize>) -> Self {
        if let Some(max_items) = max_items {
            self.max_items = max_items;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_items > MAX_ITEMS_LIMIT {
            return Err(anyhow!("max_items must be at most {}", MAX_ITEMS_LIMIT));
        }

        if matches!(self.catalog_path.as_deref(), Some(path) if path.trim().is_empty()) {
            return Err(anyhow!("catalog_path must not be empty when set"));
        }

        Ok(())
    }

    /// Catalog named by `catalog_path`, or the bundled one.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Catalog::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_max_items() {
        let mut config = Config::default();
        config.max_items = 500;
        assert!(config.validate().is_err());

        config.max_items = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_items_override_is_capped() {
        let config = Config::default().with_max_items(Some(500));
        assert_eq!(config.max_items, 500);
        assert!(config.validate().is_err());

        let config = Config::default().with_max_items(Some(MAX_ITEMS_LIMIT));
        assert!(config.validate().is_ok());

        let config = Config::default().with_max_items(None);
        assert_eq!(config.max_items, DEFAULT_MAX_ITEMS);
    }

    #[test]
    fn test_blank_catalog_path() {
        let config = Config {
            catalog_path: Some("  ".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = Config::default().load_catalog().unwrap();
        assert!(!catalog.is_empty());
    }
}
