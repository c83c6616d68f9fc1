//! Environment-driven catalog configuration.

use std::path::PathBuf;

use anyhow::Context;

use crate::catalog::{Catalog, CatalogSource, EmbeddedCatalog, JsonDirCatalog};

/// Directory holding `users.json`, `categories.json` and `products.json`.
pub const DATA_DIR_ENV: &str = "PRODCAT_DATA_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// `None` selects the embedded seed catalog.
    pub data_dir: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` uses the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self { data_dir }
    }

    pub fn source(&self) -> Box<dyn CatalogSource> {
        match &self.data_dir {
            Some(dir) => Box::new(JsonDirCatalog::new(dir.clone())),
            None => Box::new(EmbeddedCatalog),
        }
    }
}

/// Load the catalog selected by `PRODCAT_DATA_DIR`.
pub fn load_configured_catalog() -> anyhow::Result<Catalog> {
    let config = CatalogConfig::from_env();
    if config.data_dir.is_none() {
        tracing::debug!("{DATA_DIR_ENV} not set; using embedded catalog");
    }
    config
        .source()
        .load()
        .with_context(|| format!("loading catalog ({config:?})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_blank_data_dir_selects_embedded() {
        assert_eq!(CatalogConfig::from_lookup(|_| None).data_dir, None);
        assert_eq!(
            CatalogConfig::from_lookup(|_| Some("  ".to_string())).data_dir,
            None
        );
    }

    #[test]
    fn data_dir_is_read_from_lookup() {
        let config = CatalogConfig::from_lookup(|key| {
            (key == DATA_DIR_ENV).then(|| "/srv/catalog".to_string())
        });
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/catalog")));
    }

    #[test]
    fn embedded_source_loads() {
        let catalog = CatalogConfig::default().source().load().unwrap();
        assert_eq!(catalog.products().len(), 7);
    }

    #[test]
    fn configured_catalog_defaults_to_embedded() {
        if std::env::var_os(DATA_DIR_ENV).is_some() {
            return;
        }
        let catalog = load_configured_catalog().unwrap();
        assert_eq!(catalog.users().len(), 4);
    }
}
