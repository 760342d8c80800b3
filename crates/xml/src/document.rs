//! Document builder: creates nodes and renders trees to markup.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{NodeError, RenderError};
use crate::escape::{escape, is_valid_name, is_xml_char};
use crate::node::Node;

/// XML document settings shared by every node created for one feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    version: String,
    encoding: String,
    indent: Option<usize>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: "UTF-8".to_string(),
            indent: None,
        }
    }
}

impl Document {
    /// An XML 1.0, UTF-8 document rendered without indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render with `width` spaces of indentation per nesting level.
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Create an element with no content.
    pub fn create_element(&self, name: &str) -> Result<Node, NodeError> {
        check_name(name)?;
        Ok(Node::new(name.to_string(), None))
    }

    /// Create an empty element whose name is fixed at compile time.
    ///
    /// `name` must be a valid element name; this is checked in debug builds.
    pub fn create_static_element(&self, name: &'static str) -> Node {
        debug_assert!(is_valid_name(name), "invalid element name `{name}`");
        Node::new(name.to_string(), None)
    }

    /// Create an element holding `raw` as text. The text is escaped on the way in.
    pub fn create_text_element(&self, name: &str, raw: &str) -> Result<Node, NodeError> {
        check_name(name)?;
        if let Some(character) = raw.chars().find(|c| !is_xml_char(*c)) {
            return Err(NodeError::InvalidCharacter {
                name: name.to_string(),
                character,
            });
        }
        Ok(Node::new(name.to_string(), Some(escape(raw).into_owned())))
    }

    /// Create an element holding a float in shortest round-trip form (`19.99`, `20`).
    pub fn create_float_element(&self, name: &str, value: f64) -> Result<Node, NodeError> {
        if !value.is_finite() {
            return Err(NodeError::NonFiniteNumber {
                name: name.to_string(),
            });
        }
        self.create_text_element(name, &value.to_string())
    }

    /// Render `root` (with an XML declaration) into a string.
    pub fn render(&self, root: &Node) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.write(root, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Render `root` (with an XML declaration) into `out`.
    pub fn write<W: Write>(&self, root: &Node, out: W) -> Result<(), RenderError> {
        let mut writer = match self.indent {
            Some(width) => Writer::new_with_indent(out, b' ', width),
            None => Writer::new(out),
        };
        writer.write_event(Event::Decl(BytesDecl::new(
            &self.version,
            Some(self.encoding.as_str()),
            None,
        )))?;
        write_node(&mut writer, root)?;
        Ok(())
    }
}

fn check_name(name: &str) -> Result<(), NodeError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(NodeError::InvalidName(name.to_string()))
    }
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node) -> Result<(), RenderError> {
    if node.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(node.name())))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(node.name())))?;
    if let Some(text) = node.text() {
        writer.write_event(Event::Text(BytesText::from_escaped(text)))?;
    }
    for child in node.children() {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(node.name())))?;
    Ok(())
}
