//! Intersection observation over the modeled viewport.
//!
//! An observer watches a set of nodes and, on every sweep, reports entries
//! for nodes whose intersection state changed (plus one initial entry per
//! node on its first sweep, matching how browsers deliver an initial
//! callback). An element intersects when the visible fraction of its rect
//! inside the margin-adjusted viewport band reaches the observer threshold.

use crate::geometry::{GeometryMap, LayoutRect};
use crate::viewport::Viewport;
use dom::{Dom, NodeId};
use std::collections::HashMap;

/// Band insets as percentages of viewport height. Negative values shrink the
/// band, positive values grow it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top_pct: f64,
    pub bottom_pct: f64,
}

impl RootMargin {
    pub const NONE: Self = Self {
        top_pct: 0.0,
        bottom_pct: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: RootMargin,
    pub threshold: f64,
}

/// One observed transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Watches nodes and reports intersection transitions.
#[derive(Debug)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    observed: Vec<NodeId>,
    states: HashMap<NodeId, bool>,
}

impl IntersectionObserver {
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            observed: Vec::new(),
            states: HashMap::new(),
        }
    }

    pub fn observe(&mut self, node: NodeId) {
        if !self.observed.contains(&node) {
            self.observed.push(node);
        }
    }

    pub fn unobserve(&mut self, node: NodeId) {
        self.observed.retain(|observed| *observed != node);
        self.states.remove(&node);
    }

    #[must_use]
    pub fn is_observing(&self, node: NodeId) -> bool {
        self.observed.contains(&node)
    }

    /// Compute entries for the current viewport position.
    pub fn sweep(&mut self, geometry: &GeometryMap, viewport: &Viewport) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        for node in &self.observed {
            let ratio = geometry
                .rect(*node)
                .map_or(0.0, |rect| band_ratio(rect, viewport, self.options.root_margin));
            let is_intersecting = if self.options.threshold <= 0.0 {
                ratio > 0.0
            } else {
                ratio >= self.options.threshold
            };
            let changed = self.states.get(node) != Some(&is_intersecting);
            if changed {
                entries.push(IntersectionEntry {
                    target: *node,
                    is_intersecting,
                    ratio,
                });
            }
            self.states.insert(*node, is_intersecting);
        }
        entries
    }
}

/// Fraction of the rect inside the margin-adjusted viewport band.
fn band_ratio(rect: LayoutRect, viewport: &Viewport, margin: RootMargin) -> f64 {
    let band_top = viewport.scroll_y() - viewport.height() * margin.top_pct / 100.0;
    let band_bottom =
        viewport.scroll_y() + viewport.height() + viewport.height() * margin.bottom_pct / 100.0;
    if band_bottom <= band_top {
        return 0.0;
    }
    if rect.height <= 0.0 {
        // Degenerate rect: in or out, nothing in between.
        return if rect.top >= band_top && rect.top <= band_bottom {
            1.0
        } else {
            0.0
        };
    }
    let visible_top = rect.top.max(band_top);
    let visible_bottom = rect.bottom().min(band_bottom);
    ((visible_bottom - visible_top) / rect.height).clamp(0.0, 1.0)
}

/// Reacts to intersection entries, possibly unobserving targets.
pub trait IntersectionSubscriber {
    fn on_entries(
        &mut self,
        dom: &mut Dom,
        observer: &mut IntersectionObserver,
        entries: &[IntersectionEntry],
    );
}

/// Pairs an observer with its subscriber and delivers sweep results.
pub struct ObserverMirror<T: IntersectionSubscriber> {
    observer: IntersectionObserver,
    subscriber: T,
}

impl<T: IntersectionSubscriber> ObserverMirror<T> {
    pub fn new(options: ObserverOptions, subscriber: T) -> Self {
        Self {
            observer: IntersectionObserver::new(options),
            subscriber,
        }
    }

    pub fn observe(&mut self, node: NodeId) {
        self.observer.observe(node);
    }

    #[must_use]
    pub fn is_observing(&self, node: NodeId) -> bool {
        self.observer.is_observing(node)
    }

    /// Sweep and deliver any transitions to the subscriber.
    pub fn sweep(&mut self, dom: &mut Dom, geometry: &GeometryMap, viewport: &Viewport) {
        let entries = self.observer.sweep(geometry, viewport);
        if entries.is_empty() {
            return;
        }
        self.subscriber.on_entries(dom, &mut self.observer, &entries);
    }
}
