//! Errors raised while building and rendering XML trees.

use thiserror::Error;

/// A single element could not be created.
///
/// Transformers recover from this per field: the offending child is left out
/// and the failure is recorded in the [`NodeReport`](crate::NodeReport).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("invalid element name `{0}`")]
    InvalidName(String),

    #[error("element `{name}` contains a character not allowed in XML: {character:?}")]
    InvalidCharacter { name: String, character: char },

    #[error("element `{name}` holds a non-finite number")]
    NonFiniteNumber { name: String },
}

/// Rendering a tree to markup failed.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("xml writer error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("rendered document is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
