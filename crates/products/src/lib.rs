//! Products domain module: the size variants a product is offered in.
//!
//! Size names are checked against a [`SizeCatalog`] that the application loads
//! once and passes by reference. Variants serialize themselves into feed XML
//! through [`feedkit_xml::XmlTransformer`].

pub mod catalog;
pub mod config;
pub mod size;

pub use catalog::{CatalogError, SizeCatalog, SizeRecord};
pub use config::CatalogConfig;
pub use size::SizeVariant;
