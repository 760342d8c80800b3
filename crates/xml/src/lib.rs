//! `feedkit-xml` — the XML tree used to build marketplace feed documents.
//!
//! Domain objects never write documents themselves. They turn into [`Node`]s
//! through a caller-owned [`Document`], and the caller decides where the
//! rendered markup goes.

pub mod document;
pub mod error;
pub mod escape;
pub mod node;
pub mod transform;

pub use document::Document;
pub use error::{NodeError, RenderError};
pub use escape::{escape, is_valid_name, is_xml_char};
pub use node::Node;
pub use transform::{NodeReport, SkippedField, XmlTransformer};
