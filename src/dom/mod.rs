// SPDX-License-Identifier: PMPL-1.0-or-later
//! Read-only document tree consumed by the rule engine.
//!
//! The tree lives in an arena owned by [`Document`]. Rules navigate it through
//! borrowed [`NodeRef`] handles; parent and sibling links are arena indices,
//! so the structure cannot form a reference cycle and the rules never own or
//! mutate a node.
//!
//! Every walk over the tree (descendants, ancestors, siblings, and the
//! conversion from the HTML parser) uses an explicit work list instead of
//! native recursion, so deeply nested markup only costs heap.

use scraper::{Html, Node};
use std::fmt;

/// Kind of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The single root of the tree
    Document,
    /// A markup element with a tag and attributes
    Element,
    /// Character data
    Text,
    /// An HTML comment
    Comment,
}

/// Index of a node inside its [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One authored attribute. Keys are not unique within an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    tag: String,
    text: String,
    attributes: Vec<Attribute>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Position within the parent's children
    index: usize,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            tag: String::new(),
            text: String::new(),
            attributes: Vec::new(),
            parent: None,
            children: Vec::new(),
            index: 0,
        }
    }
}

/// Arena-backed document tree rooted at one document node
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a tree holding only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Document)],
        }
    }

    /// Parse an HTML page into a tree
    pub fn parse_html(content: &str) -> Self {
        Self::from_html(&Html::parse_document(content))
    }

    /// Convert an already parsed `scraper` document.
    ///
    /// Doctype and processing-instruction nodes are dropped.
    pub fn from_html(html: &Html) -> Self {
        let mut doc = Self::new();
        let mut pending = vec![(html.tree.root(), doc.root().id())];

        while let Some((source, target)) = pending.pop() {
            let mut converted = Vec::new();
            for child in source.children() {
                let id = match child.value() {
                    Node::Element(element) => {
                        let attributes: Vec<(&str, &str)> = element.attrs().collect();
                        doc.append_element(target, element.name(), &attributes)
                    }
                    Node::Text(text) => doc.append_text(target, &text.text),
                    Node::Comment(comment) => doc.append_comment(target, &comment.comment),
                    _ => continue,
                };
                converted.push((child, id));
            }
            pending.extend(converted.into_iter().rev());
        }

        doc
    }

    /// The document root
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            doc: self,
            id: NodeId(0),
        }
    }

    /// Look up a node by id
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { doc: self, id })
    }

    /// Number of nodes, the root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append an element under `parent`, keeping attributes in the given order.
    ///
    /// `parent` must come from this document.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> NodeId {
        let mut data = NodeData::new(NodeKind::Element);
        data.tag = tag.to_string();
        data.attributes = attributes
            .iter()
            .map(|(key, value)| Attribute {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect();
        self.push(parent, data)
    }

    /// Append a text node under `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let mut data = NodeData::new(NodeKind::Text);
        data.text = text.to_string();
        self.push(parent, data)
    }

    /// Append a comment node under `parent`
    pub fn append_comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        let mut data = NodeData::new(NodeKind::Comment);
        data.text = text.to_string();
        self.push(parent, data)
    }

    fn push(&mut self, parent: NodeId, mut data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        data.parent = Some(parent);
        data.index = self.nodes[parent.0].children.len();
        self.nodes.push(data);
        self.nodes[parent.0].children.push(id);
        id
    }
}

/// Borrowed handle to one node of a [`Document`]
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            NodeKind::Element => write!(f, "<{}>#{}", self.tag(), self.id.0),
            kind => write!(f, "{:?}#{}", kind, self.id.0),
        }
    }
}

impl<'a> NodeRef<'a> {
    fn data(&self) -> &'a NodeData {
        &self.doc.nodes[self.id.0]
    }

    fn wrap(&self, id: NodeId) -> NodeRef<'a> {
        NodeRef { doc: self.doc, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    pub fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    /// Tag name; empty unless this is an element
    pub fn tag(&self) -> &'a str {
        &self.data().tag
    }

    /// Character data of text and comment nodes; empty otherwise
    pub fn text(&self) -> &'a str {
        &self.data().text
    }

    /// Attributes in authored order, duplicates included
    pub fn attributes(&self) -> &'a [Attribute] {
        &self.data().attributes
    }

    /// Value of the first attribute with this key
    pub fn attr(&self, key: &str) -> Option<&'a str> {
        self.attributes()
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|id| self.wrap(id))
    }

    /// Direct children in document order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + 'a {
        let doc = self.doc;
        self.data()
            .children
            .iter()
            .map(move |&id| NodeRef { doc, id })
    }

    pub fn prev_sibling(&self) -> Option<NodeRef<'a>> {
        let data = self.data();
        let parent = data.parent?;
        let index = data.index.checked_sub(1)?;
        Some(self.wrap(self.doc.nodes[parent.0].children[index]))
    }

    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        let data = self.data();
        let parent = data.parent?;
        self.doc.nodes[parent.0]
            .children
            .get(data.index + 1)
            .map(|&id| self.wrap(id))
    }

    /// This node followed by its subtree, pre-order
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants { stack: vec![*self] }
    }

    /// Parent, grandparent, and so on up to the root
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// Previous siblings, nearest first
    pub fn preceding_siblings(&self) -> impl Iterator<Item = NodeRef<'a>> {
        std::iter::successors(self.prev_sibling(), |node| node.prev_sibling())
    }
}

/// Pre-order walk driven by an explicit stack
pub struct Descendants<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags<'a>(nodes: impl Iterator<Item = NodeRef<'a>>) -> Vec<&'a str> {
        nodes.filter(|n| n.is_element()).map(|n| n.tag()).collect()
    }

    #[test]
    fn test_parse_builds_element_tree() {
        let doc = Document::parse_html("<html><body><p>hi</p><img src=\"a.png\"></body></html>");
        let root = doc.root();
        assert_eq!(root.kind(), NodeKind::Document);
        assert!(root.parent().is_none());
        assert_eq!(
            tags(root.descendants()),
            vec!["html", "head", "body", "p", "img"]
        );
    }

    #[test]
    fn test_parse_keeps_text_and_comments() {
        let doc = Document::parse_html("<!DOCTYPE html><html><body><!-- note -->text</body></html>");
        let kinds: Vec<NodeKind> = doc.root().descendants().map(|n| n.kind()).collect();
        assert!(kinds.contains(&NodeKind::Comment));
        assert!(kinds.contains(&NodeKind::Text));
        // Doctype is dropped, so the first child of the root is <html>
        let first = doc.root().children().next().expect("root has a child");
        assert_eq!(first.tag(), "html");
    }

    #[test]
    fn test_attributes_from_parser() {
        let doc = Document::parse_html(r#"<img src="a.png" alt="A chart">"#);
        let img = doc
            .root()
            .descendants()
            .find(|n| n.tag() == "img")
            .expect("img parsed");
        assert_eq!(img.attr("alt"), Some("A chart"));
        assert_eq!(img.attr("title"), None);
    }

    #[test]
    fn test_builder_keeps_duplicate_attributes_in_order() {
        let mut doc = Document::new();
        let root = doc.root().id();
        let id = doc.append_element(root, "input", &[("type", "text"), ("type", "submit")]);
        let input = doc.get(id).expect("node exists");
        let values: Vec<&str> = input.attributes().iter().map(|a| a.value.as_str()).collect();
        assert_eq!(values, vec!["text", "submit"]);
        assert_eq!(input.attr("type"), Some("text"));
    }

    #[test]
    fn test_sibling_navigation_matches_children() {
        let mut doc = Document::new();
        let root = doc.root().id();
        let ul = doc.append_element(root, "ul", &[]);
        let a = doc.append_element(ul, "li", &[]);
        let b = doc.append_text(ul, " ");
        let c = doc.append_element(ul, "li", &[]);

        let c = doc.get(c).expect("node exists");
        assert_eq!(c.prev_sibling().map(|n| n.id()), Some(b));
        assert_eq!(c.next_sibling(), None);
        let preceding: Vec<NodeId> = c.preceding_siblings().map(|n| n.id()).collect();
        assert_eq!(preceding, vec![b, a]);

        let a = doc.get(a).expect("node exists");
        assert_eq!(a.prev_sibling(), None);
        assert_eq!(a.next_sibling().map(|n| n.id()), Some(b));
        assert_eq!(a.parent().map(|n| n.id()), Some(ul));
    }

    #[test]
    fn test_descendants_preorder_document_order() {
        let mut doc = Document::new();
        let root = doc.root().id();
        let div = doc.append_element(root, "div", &[]);
        let span = doc.append_element(div, "span", &[]);
        doc.append_element(span, "b", &[]);
        doc.append_element(div, "i", &[]);
        doc.append_element(root, "footer", &[]);

        assert_eq!(
            tags(doc.root().descendants()),
            vec!["div", "span", "b", "i", "footer"]
        );
    }

    #[test]
    fn test_ancestors_walk_to_root() {
        let mut doc = Document::new();
        let root = doc.root().id();
        let a = doc.append_element(root, "a", &[]);
        let b = doc.append_element(a, "b", &[]);
        let c = doc.append_element(b, "c", &[]);
        let c = doc.get(c).expect("node exists");
        let chain: Vec<NodeId> = c.ancestors().map(|n| n.id()).collect();
        assert_eq!(chain, vec![b, a, root]);
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let depth = 50_000;
        let mut doc = Document::new();
        let mut parent = doc.root().id();
        for _ in 0..depth {
            parent = doc.append_element(parent, "div", &[]);
        }
        assert_eq!(doc.root().descendants().count(), depth + 1);
        let deepest = doc.get(parent).expect("node exists");
        assert_eq!(deepest.ancestors().count(), depth);
    }

    #[test]
    fn test_get_out_of_range() {
        let doc = Document::new();
        assert_eq!(doc.node_count(), 1);
        assert!(doc.get(NodeId(5)).is_none());
    }
}
