//! UI tree collaborator.
//!
//! The core never owns page nodes. It reads and writes text, placeholders and
//! values through [`UiTree`], addressing nodes by [`NodeRef`] handles or by
//! element id. Every lookup may miss; callers treat a miss as a no-op.
//!
//! [`MemoryDocument`] is an in-memory tree used by the demo host and tests.
//! It deserializes from a JSON page fixture.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Attribute carrying a node's Russian text.
pub const RU_TEXT_ATTR: &str = "data-ru";

/// Attribute carrying a node's English text.
pub const EN_TEXT_ATTR: &str = "data-en";

/// Element id of the language indicator control.
pub const LANGUAGE_BUTTON_ID: &str = "lang-btn";

/// A UI tree shared between the engine, the form and the banner timer.
pub type SharedUi<U> = Arc<Mutex<U>>;

/// Lock a shared tree, recovering the guard if a previous holder panicked.
pub fn lock_ui<U>(ui: &SharedUi<U>) -> MutexGuard<'_, U> {
    ui.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Non-owning handle to a node in a [`UiTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(pub usize);

/// Handle to an inserted banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BannerId(pub u64);

/// What kind of element a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Any non-form element (headings, paragraphs, links)
    #[default]
    Element,
    /// Single-line text entry
    Input,
    /// Multi-line text entry
    TextArea,
    /// Submit-style control (submit input or primary form button)
    Submit,
    /// Plain button outside form submission
    Button,
}

impl NodeKind {
    /// Whether the node shows a placeholder hint instead of visible text.
    pub fn is_text_entry(&self) -> bool {
        matches!(self, NodeKind::Input | NodeKind::TextArea)
    }
}

/// Outcome a banner reports to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// Host UI capability the core depends on.
pub trait UiTree {
    /// Nodes carrying both locale text attributes, in document order.
    fn translatable_nodes(&self) -> Vec<NodeRef>;

    /// Look up a node by element id.
    fn find_by_id(&self, id: &str) -> Option<NodeRef>;

    /// The node's element id, if it has one.
    fn node_id(&self, node: NodeRef) -> Option<String>;

    /// Assign an element id to a node.
    fn set_node_id(&mut self, node: NodeRef, id: &str);

    /// The kind of element, `None` if the node no longer exists.
    fn node_kind(&self, node: NodeRef) -> Option<NodeKind>;

    /// Read an attribute.
    fn attribute(&self, node: NodeRef, name: &str) -> Option<String>;

    /// Replace the visible text content.
    fn set_text(&mut self, node: NodeRef, text: &str);

    /// Replace the placeholder hint.
    fn set_placeholder(&mut self, node: NodeRef, text: &str);

    /// Current value of an entry field.
    fn value(&self, node: NodeRef) -> Option<String>;

    /// Replace the value of an entry field.
    fn set_value(&mut self, node: NodeRef, value: &str);

    /// The contact form's submit control.
    fn submit_control(&self) -> Option<NodeRef>;

    /// Named values of every field in the contact form, in document order.
    fn form_values(&self) -> Vec<(String, String)>;

    /// Clear every field in the contact form.
    fn reset_form(&mut self);

    /// Insert a banner at the top of the contact form.
    ///
    /// # Returns
    /// `None` when the page has no contact form.
    fn insert_banner(&mut self, kind: BannerKind, text: &str) -> Option<BannerId>;

    /// Remove one banner. Unknown ids are ignored.
    fn remove_banner(&mut self, banner: BannerId);

    /// Remove every success and error banner.
    fn remove_banners(&mut self);
}

// ==================== In-memory tree ====================

/// One element of a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub kind: NodeKind,

    /// Form field name; only named nodes inside the form submit a value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the node belongs to the contact form
    #[serde(default)]
    pub in_form: bool,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub placeholder: String,

    #[serde(default)]
    pub value: String,
}

impl Node {
    /// Create an element node with the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the element id.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Attach both locale text attributes.
    pub fn with_translations(mut self, ru: &str, en: &str) -> Self {
        self.attributes
            .insert(RU_TEXT_ATTR.to_string(), ru.to_string());
        self.attributes
            .insert(EN_TEXT_ATTR.to_string(), en.to_string());
        self
    }

    /// Make the node a named field of the contact form.
    pub fn in_form(mut self, name: &str) -> Self {
        self.in_form = true;
        self.name = Some(name.to_string());
        self
    }

    /// Set the visible text.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }
}

/// A banner displayed at the top of the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    pub kind: BannerKind,
    pub text: String,
}

/// In-memory page used by the demo host and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// Whether the page contains a contact form
    #[serde(default)]
    pub has_form: bool,

    /// Banners currently shown, topmost first
    #[serde(default)]
    pub banners: Vec<Banner>,

    #[serde(skip)]
    next_banner_id: u64,
}

impl MemoryDocument {
    /// Create an empty page with or without a contact form.
    pub fn new(has_form: bool) -> Self {
        Self {
            has_form,
            ..Self::default()
        }
    }

    /// Parse a page fixture from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Append a node and return its handle.
    pub fn push(&mut self, node: Node) -> NodeRef {
        self.nodes.push(node);
        NodeRef(self.nodes.len() - 1)
    }

    /// Borrow a node by handle.
    pub fn node(&self, node: NodeRef) -> Option<&Node> {
        self.nodes.get(node.0)
    }

    /// Borrow a node by element id.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.find_by_id(id).and_then(|node| self.node(node))
    }

    fn node_mut(&mut self, node: NodeRef) -> Option<&mut Node> {
        self.nodes.get_mut(node.0)
    }

    fn form_fields(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(|node| node.in_form && node.kind != NodeKind::Submit)
    }
}

impl UiTree for MemoryDocument {
    fn translatable_nodes(&self) -> Vec<NodeRef> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| {
                node.attributes.contains_key(RU_TEXT_ATTR)
                    && node.attributes.contains_key(EN_TEXT_ATTR)
            })
            .map(|(index, _)| NodeRef(index))
            .collect()
    }

    fn find_by_id(&self, id: &str) -> Option<NodeRef> {
        self.nodes
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
            .map(NodeRef)
    }

    fn node_id(&self, node: NodeRef) -> Option<String> {
        self.node(node).and_then(|n| n.id.clone())
    }

    fn set_node_id(&mut self, node: NodeRef, id: &str) {
        if let Some(n) = self.node_mut(node) {
            n.id = Some(id.to_string());
        }
    }

    fn node_kind(&self, node: NodeRef) -> Option<NodeKind> {
        self.node(node).map(|n| n.kind)
    }

    fn attribute(&self, node: NodeRef, name: &str) -> Option<String> {
        self.node(node).and_then(|n| n.attributes.get(name).cloned())
    }

    fn set_text(&mut self, node: NodeRef, text: &str) {
        if let Some(n) = self.node_mut(node) {
            n.text = text.to_string();
        }
    }

    fn set_placeholder(&mut self, node: NodeRef, text: &str) {
        if let Some(n) = self.node_mut(node) {
            n.placeholder = text.to_string();
        }
    }

    fn value(&self, node: NodeRef) -> Option<String> {
        self.node(node).map(|n| n.value.clone())
    }

    fn set_value(&mut self, node: NodeRef, value: &str) {
        if let Some(n) = self.node_mut(node) {
            n.value = value.to_string();
        }
    }

    fn submit_control(&self) -> Option<NodeRef> {
        self.nodes
            .iter()
            .position(|node| node.in_form && node.kind == NodeKind::Submit)
            .map(NodeRef)
    }

    fn form_values(&self) -> Vec<(String, String)> {
        self.form_fields()
            .filter_map(|node| {
                node.name
                    .as_ref()
                    .map(|name| (name.clone(), node.value.clone()))
            })
            .collect()
    }

    fn reset_form(&mut self) {
        for node in self.nodes.iter_mut().filter(|n| n.in_form) {
            if node.kind != NodeKind::Submit {
                node.value.clear();
            }
        }
    }

    fn insert_banner(&mut self, kind: BannerKind, text: &str) -> Option<BannerId> {
        if !self.has_form {
            return None;
        }
        self.next_banner_id += 1;
        let id = BannerId(self.next_banner_id);
        self.banners.insert(
            0,
            Banner {
                id,
                kind,
                text: text.to_string(),
            },
        );
        Some(id)
    }

    fn remove_banner(&mut self, banner: BannerId) {
        self.banners.retain(|b| b.id != banner);
    }

    fn remove_banners(&mut self) {
        self.banners.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> MemoryDocument {
        let mut doc = MemoryDocument::new(true);
        doc.push(Node::new(NodeKind::Element).with_translations("Главная", "Home"));
        doc.push(Node::new(NodeKind::Element).with_id("plain").with_text("static"));
        doc.push(Node::new(NodeKind::Input).with_id("name").in_form("name"));
        doc.push(Node::new(NodeKind::Submit).in_form("submit"));
        doc
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_translatable_nodes_requires_both_attributes() {
        let mut doc = sample_page();
        let mut half = Node::new(NodeKind::Element);
        half.attributes
            .insert(RU_TEXT_ATTR.to_string(), "только".to_string());
        doc.push(half);

        assert_eq!(doc.translatable_nodes(), vec![NodeRef(0)]);
    }

    #[test]
    fn test_find_by_id() {
        let doc = sample_page();
        assert_eq!(doc.find_by_id("plain"), Some(NodeRef(1)));
        assert_eq!(doc.find_by_id("missing"), None);
    }

    #[test]
    fn test_submit_control_only_inside_form() {
        let mut doc = MemoryDocument::new(true);
        doc.push(Node::new(NodeKind::Submit));
        assert_eq!(doc.submit_control(), None);

        let inside = doc.push(Node::new(NodeKind::Submit).in_form("send"));
        assert_eq!(doc.submit_control(), Some(inside));
    }

    #[test]
    fn test_missing_node_operations_are_no_ops() {
        let mut doc = sample_page();
        let before = doc.clone();
        let ghost = NodeRef(99);

        doc.set_text(ghost, "x");
        doc.set_placeholder(ghost, "x");
        doc.set_value(ghost, "x");
        doc.set_node_id(ghost, "x");

        assert_eq!(doc, before);
        assert_eq!(doc.node_kind(ghost), None);
        assert_eq!(doc.value(ghost), None);
    }

    // ==================== Form Tests ====================

    #[test]
    fn test_form_values_skip_submit_control() {
        let mut doc = sample_page();
        doc.set_value(NodeRef(2), "Ann");

        assert_eq!(
            doc.form_values(),
            vec![("name".to_string(), "Ann".to_string())]
        );
    }

    #[test]
    fn test_reset_form_clears_values() {
        let mut doc = sample_page();
        doc.set_value(NodeRef(2), "Ann");
        doc.reset_form();
        assert_eq!(doc.value(NodeRef(2)), Some(String::new()));
    }

    // ==================== Banner Tests ====================

    #[test]
    fn test_insert_banner_goes_on_top() {
        let mut doc = sample_page();
        let first = doc.insert_banner(BannerKind::Error, "first").unwrap();
        let second = doc.insert_banner(BannerKind::Success, "second").unwrap();

        assert_ne!(first, second);
        assert_eq!(doc.banners[0].id, second);
        assert_eq!(doc.banners[1].id, first);
    }

    #[test]
    fn test_insert_banner_without_form() {
        let mut doc = MemoryDocument::new(false);
        assert!(doc.insert_banner(BannerKind::Error, "x").is_none());
        assert!(doc.banners.is_empty());
    }

    #[test]
    fn test_remove_banner_by_id() {
        let mut doc = sample_page();
        let first = doc.insert_banner(BannerKind::Error, "first").unwrap();
        doc.insert_banner(BannerKind::Error, "second");
        doc.remove_banner(first);

        assert_eq!(doc.banners.len(), 1);
        assert_eq!(doc.banners[0].text, "second");
    }

    // ==================== Fixture Tests ====================

    #[test]
    fn test_from_json_fixture() {
        let json = r#"{
            "has_form": true,
            "nodes": [
                {"id": "hero", "attributes": {"data-ru": "Привет", "data-en": "Hello"}, "text": "Привет"},
                {"id": "email", "kind": "input", "name": "email", "in_form": true}
            ]
        }"#;

        let doc = MemoryDocument::from_json(json).expect("Should parse");
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.nodes[1].kind, NodeKind::Input);
        assert_eq!(doc.translatable_nodes(), vec![NodeRef(0)]);
    }

    #[test]
    fn test_text_entry_kinds() {
        assert!(NodeKind::Input.is_text_entry());
        assert!(NodeKind::TextArea.is_text_entry());
        assert!(!NodeKind::Submit.is_text_entry());
        assert!(!NodeKind::Element.is_text_entry());
    }
}
