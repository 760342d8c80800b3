//! Catalog of size names the marketplace accepts.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use feedkit_core::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One size known to the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRecord {
    pub size_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SizeRecord {
    pub fn named(size_name: impl Into<String>) -> Self {
        Self {
            size_name: size_name.into(),
            size_id: None,
            label: None,
        }
    }
}

/// Error type for loading a catalog from a provisioning file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read size catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed xml size catalog: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("malformed json size catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Provisioning file layout: `<sizes><size>..</size></sizes>` or `{"sizes": [..]}`.
#[derive(Debug, Deserialize)]
struct SizesFile {
    #[serde(rename = "size", alias = "sizes", default)]
    sizes: Vec<SizeRecord>,
}

/// Read-only snapshot of the sizes the marketplace accepts.
///
/// Built once by the application and shared by reference. A catalog never
/// changes after construction; picking up new sizes means building a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeCatalog {
    sizes: Vec<SizeRecord>,
    names: HashSet<String>,
}

impl SizeCatalog {
    pub fn new(sizes: Vec<SizeRecord>) -> Self {
        let names = sizes.iter().map(|s| s.size_name.clone()).collect();
        Self { sizes, names }
    }

    /// Parse an XML provisioning document.
    pub fn from_xml_str(xml: &str) -> Result<Self, CatalogError> {
        let file: SizesFile = quick_xml::de::from_str(xml)?;
        Ok(Self::new(file.sizes))
    }

    /// Parse a JSON provisioning document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: SizesFile = serde_json::from_str(json)?;
        Ok(Self::new(file.sizes))
    }

    /// Load a provisioning file; `.json` files are parsed as JSON, anything else as XML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_xml_str(&contents)?
        };

        tracing::debug!(
            path = %path.display(),
            sizes = catalog.len(),
            "loaded size catalog"
        );
        Ok(catalog)
    }

    pub fn sizes(&self) -> &[SizeRecord] {
        &self.sizes
    }

    pub fn size_names(&self) -> impl Iterator<Item = &str> {
        self.sizes.iter().map(|s| s.size_name.as_str())
    }

    pub fn contains(&self, size_name: &str) -> bool {
        self.names.contains(size_name)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// A missing or empty name is always accepted; anything else must be in the catalog.
    pub fn validate_size_name(&self, size_name: Option<&str>) -> DomainResult<()> {
        match size_name {
            Some(name) if !name.is_empty() && !self.contains(name) => {
                Err(DomainError::unsupported_size(name))
            }
            _ => Ok(()),
        }
    }
}

impl FromIterator<SizeRecord> for SizeCatalog {
    fn from_iter<I: IntoIterator<Item = SizeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
