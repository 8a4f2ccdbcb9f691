//! HTML5 parsing using html5ever.

use crate::{Dom, NodeId};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

impl Dom {
    /// Parse an HTML document into a fresh tree.
    ///
    /// Doctype declarations, comments, processing instructions and
    /// whitespace-only text nodes are dropped; the behaviors never look at
    /// them.
    pub fn parse(html: &str) -> Self {
        let rc_dom: RcDom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .unwrap();

        let mut dom = Self::new();
        let root = dom.root();
        convert_node(&mut dom, &rc_dom.document, root);
        dom
    }
}

fn convert_node(dom: &mut Dom, rc_node: &Handle, parent: NodeId) {
    match &rc_node.data {
        NodeData::Document => {
            for child in rc_node.children.borrow().iter() {
                convert_node(dom, child, parent);
            }
        }

        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if text.trim().is_empty() {
                return;
            }
            let node = dom.create_text(&text);
            dom.append_child(parent, node);
        }

        NodeData::Element { name, attrs, .. } => {
            let node = dom.create_element(&name.local.to_string());
            for attr in attrs.borrow().iter() {
                dom.set_attr(node, &attr.name.local.to_string(), &attr.value.to_string());
            }
            dom.append_child(parent, node);

            for child in rc_node.children.borrow().iter() {
                convert_node(dom, child, node);
            }
        }

        NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => {}
    }
}
