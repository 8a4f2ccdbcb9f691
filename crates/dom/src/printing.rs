//! Deterministic snapshots and a debug tree printer.

use crate::{Dom, DomNode, NodeId, NodeKind};
use serde_json::{Map, Value, json};
use std::fmt;

impl Dom {
    /// Build a deterministic JSON representation of the tree.
    ///
    /// Schema:
    /// - Document: `{ "type":"document", "children":[ ... ] }`
    /// - Element: `{ "type":"element", "tag":"div", "attrs":{..}, "children":[ ... ] }`
    /// - Text: `{ "type":"text", "text":"..." }`
    ///
    /// Attributes are sorted by name and whitespace-only text is skipped so
    /// snapshots compare stably.
    pub fn to_json_value(&self) -> Value {
        self.node_to_json(self.root())
    }

    /// Pretty JSON string for snapshots and test comparisons.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json_value()).unwrap_or_else(|_| String::from("{}"))
    }

    fn node_to_json(&self, id: NodeId) -> Value {
        let Some(DomNode { kind, attrs }) = self.node(id) else {
            return Value::Null;
        };
        match kind {
            NodeKind::Document => {
                json!({ "type": "document", "children": self.children_to_json(id) })
            }
            NodeKind::Element { tag } => {
                let mut pairs: Vec<(&String, &String)> = attrs.iter().collect();
                pairs.sort_by(|a, b| a.0.cmp(b.0));
                let mut attrs_obj = Map::new();
                for (name, value) in pairs {
                    attrs_obj.insert(name.clone(), Value::String(value.clone()));
                }
                json!({
                    "type": "element",
                    "tag": tag.to_lowercase(),
                    "attrs": Value::Object(attrs_obj),
                    "children": self.children_to_json(id),
                })
            }
            NodeKind::Text { text } => {
                if text.trim().is_empty() {
                    Value::Null
                } else {
                    json!({ "type": "text", "text": text })
                }
            }
        }
    }

    /// Serialize children, merging adjacent text nodes into one entry.
    fn children_to_json(&self, id: NodeId) -> Vec<Value> {
        let mut out = Vec::new();
        let mut text_buf = String::new();
        let children: Vec<NodeId> = self.children(id).collect();
        for child in children {
            if let Some(DomNode {
                kind: NodeKind::Text { text },
                ..
            }) = self.node(child)
            {
                text_buf.push_str(text);
                continue;
            }
            flush_text(&mut out, &mut text_buf);
            let value = self.node_to_json(child);
            if !value.is_null() {
                out.push(value);
            }
        }
        flush_text(&mut out, &mut text_buf);
        out
    }
}

fn flush_text(out: &mut Vec<Value>, text_buf: &mut String) {
    if !text_buf.trim().is_empty() {
        out.push(json!({ "type": "text", "text": text_buf.clone() }));
    }
    text_buf.clear();
}

impl fmt::Debug for Dom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self, self.root(), f, 0)
    }
}

fn fmt_node(dom: &Dom, id: NodeId, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    let Some(DomNode { kind, attrs }) = dom.node(id) else {
        return Ok(());
    };
    let indent = "  ".repeat(depth);
    match kind {
        NodeKind::Document => {
            writeln!(f, "{indent}#document")?;
            fmt_children(dom, id, f, depth)?;
        }
        NodeKind::Element { tag } => {
            write!(f, "{indent}<{}", tag.to_lowercase())?;
            let mut pairs: Vec<(&String, &String)> = attrs.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));
            for (name, value) in pairs {
                write!(f, " {name}=\"{}\"", escape_text(value))?;
            }
            writeln!(f, ">")?;
            fmt_children(dom, id, f, depth)?;
            writeln!(f, "{indent}</{}>", tag.to_lowercase())?;
        }
        NodeKind::Text { text } => {
            // Skip pure-whitespace text nodes for cleaner output
            if !text.chars().all(char::is_whitespace) {
                writeln!(f, "{indent}\"{}\"", escape_text(text))?;
            }
        }
    }
    Ok(())
}

fn fmt_children(dom: &Dom, id: NodeId, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    let children: Vec<NodeId> = dom.children(id).collect();
    for child in children {
        fmt_node(dom, child, f, depth + 1)?;
    }
    Ok(())
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}
