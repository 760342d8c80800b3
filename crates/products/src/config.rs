//! Where the application finds its size catalog.

use std::path::PathBuf;

use crate::catalog::{CatalogError, SizeCatalog};

/// Environment variable holding the provisioning file path.
pub const CATALOG_PATH_ENV: &str = "FEEDKIT_SIZE_CATALOG";

/// Used when [`CATALOG_PATH_ENV`] is unset or blank.
pub const DEFAULT_CATALOG_PATH: &str = "sizes.xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl CatalogConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup` (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(CATALOG_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => Self {
                path: PathBuf::from(path.trim()),
            },
            _ => {
                tracing::debug!(
                    "{CATALOG_PATH_ENV} not set; using default {DEFAULT_CATALOG_PATH}"
                );
                Self::default()
            }
        }
    }

    pub fn load_catalog(&self) -> Result<SizeCatalog, CatalogError> {
        SizeCatalog::load(&self.path)
    }
}
