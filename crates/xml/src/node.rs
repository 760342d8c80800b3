//! Generic element node.

use std::borrow::Cow;

/// An XML element: tag name, optional text content and ordered children.
///
/// Nodes are created through a [`Document`](crate::Document), which validates
/// the name and stores the text already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    text: Option<String>,
    children: Vec<Node>,
}

impl Node {
    pub(crate) fn new(name: String, text: Option<String>) -> Self {
        Self {
            name,
            text,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content in its escaped, markup-safe form.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Text content with entities resolved back to characters.
    pub fn unescaped_text(&self) -> Option<Cow<'_, str>> {
        self.text
            .as_deref()
            .map(|text| quick_xml::escape::unescape(text).unwrap_or(Cow::Borrowed(text)))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// First child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn append_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::Document;

    #[test]
    fn children_keep_insertion_order() {
        let doc = Document::new();
        let mut parent = doc.create_element("size").unwrap();
        parent
            .append_child(doc.create_text_element("size_name", "M").unwrap())
            .append_child(doc.create_text_element("ean", "123").unwrap());

        let names: Vec<_> = parent.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["size_name", "ean"]);
        assert_eq!(parent.child("ean").and_then(|c| c.text()), Some("123"));
        assert!(parent.child("product_price").is_none());
    }

    #[test]
    fn unescaped_text_resolves_entities() {
        let doc = Document::new();
        let node = doc.create_text_element("size_reference", "A&B<C>").unwrap();
        assert_eq!(node.text(), Some("A&amp;B&lt;C&gt;"));
        assert_eq!(node.unescaped_text().as_deref(), Some("A&B<C>"));
    }
}
