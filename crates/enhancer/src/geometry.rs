//! Embedder-provided element geometry.
//!
//! No layout is computed here; whoever hosts the page assigns each element a
//! vertical band. Elements without geometry never intersect anything.

use dom::NodeId;
use std::collections::HashMap;

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub top: f64,
    pub height: f64,
}

impl LayoutRect {
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Rects per node, assigned by the embedder.
#[derive(Debug, Default)]
pub struct GeometryMap {
    rects: HashMap<NodeId, LayoutRect>,
}

impl GeometryMap {
    pub fn set(&mut self, node: NodeId, rect: LayoutRect) {
        self.rects.insert(node, rect);
    }

    #[must_use]
    pub fn rect(&self, node: NodeId) -> Option<LayoutRect> {
        self.rects.get(&node).copied()
    }

    pub fn remove(&mut self, node: NodeId) {
        self.rects.remove(&node);
    }
}
