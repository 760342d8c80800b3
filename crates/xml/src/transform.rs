//! Turning domain objects into XML nodes.

use crate::document::Document;
use crate::error::NodeError;
use crate::node::Node;

/// A field left out of a node because its element could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    pub field: &'static str,
    pub error: NodeError,
}

/// A built node together with the fields that had to be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReport {
    pub node: Node,
    pub skipped: Vec<SkippedField>,
}

impl NodeReport {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            skipped: Vec::new(),
        }
    }

    /// Append the child for `field`, or record why it could not be built.
    pub fn push_field(&mut self, field: &'static str, child: Result<Node, NodeError>) {
        match child {
            Ok(child) => {
                self.node.append_child(child);
            }
            Err(error) => {
                tracing::warn!(
                    element = self.node.name(),
                    field,
                    %error,
                    "skipping field that cannot be written as xml"
                );
                self.skipped.push(SkippedField { field, error });
            }
        }
    }

    /// True when every field made it into the node.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Implemented by objects that can be embedded in a feed document.
pub trait XmlTransformer {
    /// Build the node and report every field that was skipped.
    fn to_node_reported(&self, document: &Document) -> NodeReport;

    /// Build the node. Fields that cannot be written are left out.
    fn to_node(&self, document: &Document) -> Node {
        self.to_node_reported(document).node
    }
}
