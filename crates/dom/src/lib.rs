//! Arena-backed DOM for the burnish page enhancer.
//!
//! Holds the document tree, the mutation operations the enhancement behaviors
//! need (attributes, class lists, text replacement, element creation), and the
//! selector queries they issue. Layout and styling are out of scope; geometry
//! lives with the embedder.

pub mod parser;
mod printing;
mod query;

pub use indextree::NodeId;
pub use query::Selector;

use indextree::Arena;
use std::collections::HashMap;

/// What a node in the tree is.
#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Document,
    Element {
        tag: String,
    },
    Text {
        text: String,
    },
}

/// Data stored for each DOM node.
#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub kind: NodeKind,
    pub attrs: HashMap<String, String>,
}

impl DomNode {
    fn element(tag: String) -> Self {
        Self {
            kind: NodeKind::Element { tag },
            attrs: HashMap::new(),
        }
    }

    fn text(text: String) -> Self {
        Self {
            kind: NodeKind::Text { text },
            attrs: HashMap::new(),
        }
    }
}

/// The document tree.
pub struct Dom {
    arena: Arena<DomNode>,
    root: NodeId,
}

impl Dom {
    /// Create an empty document.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        Self {
            root: arena.new_node(DomNode::default()),
            arena,
        }
    }

    /// The document node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&DomNode> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .map(indextree::Node::get)
    }

    /// Tag name if the node is an element.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            _ => None,
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.tag(id).is_some()
    }

    /// Attribute value if the node is an element carrying it.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute. Non-element nodes are left alone.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(node) = self.arena.get_mut(id).filter(|node| !node.is_removed()) {
            let data = node.get_mut();
            if matches!(data.kind, NodeKind::Element { .. }) {
                data.attrs.insert(name.to_owned(), value.to_owned());
            }
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(node) = self.arena.get_mut(id).filter(|node| !node.is_removed()) {
            node.get_mut().attrs.remove(name);
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(indextree::Node::parent)
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// The node and all its ancestors, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.ancestors(&self.arena)
    }

    /// The node and all its descendants in document order.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.descendants(&self.arena)
    }

    /// All element nodes in document order.
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.root
            .descendants(&self.arena)
            .filter(|id| self.is_element(*id))
    }

    /// First element with the given `id` attribute.
    pub fn element_by_id(&self, id_value: &str) -> Option<NodeId> {
        self.elements().find(|id| self.attr(*id, "id") == Some(id_value))
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.new_node(DomNode::element(tag.to_owned()))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.arena.new_node(DomNode::text(text.to_owned()))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        parent.append(child, &mut self.arena);
    }

    /// Detach and drop every child of the node.
    pub fn clear_children(&mut self, id: NodeId) {
        let children: Vec<NodeId> = id.children(&self.arena).collect();
        for child in children {
            child.remove_subtree(&mut self.arena);
        }
    }

    /// Concatenated text of the node and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in id.descendants(&self.arena) {
            if let Some(DomNode {
                kind: NodeKind::Text { text },
                ..
            }) = self.node(node)
            {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace the node's children with a single text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        let child = self.create_text(text);
        self.append_child(id, child);
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let value = match self.attr(id, "class") {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class.to_owned(),
        };
        self.set_attr(id, "class", &value);
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        let Some(existing) = self.attr(id, "class") else {
            return;
        };
        let value = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr(id, "class", &value);
    }

    /// Toggle a class, returning whether it is present afterwards.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}
