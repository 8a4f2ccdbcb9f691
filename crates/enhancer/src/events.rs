//! Synthetic event dispatch into the page.

use crate::page::Page;
use anyhow::Error;
use dom::NodeId;
use log::trace;

impl Page {
    /// Dispatch a click on the first element matching the selector.
    ///
    /// Returns whether a target existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector fails to parse.
    pub fn click(&mut self, selector: &str) -> Result<bool, Error> {
        match self.dom().select_first(selector)? {
            Some(target) => {
                self.dispatch_click(target);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Dispatch a synthetic click to a node.
    ///
    /// The click walks up the ancestor chain the way bubbling activation
    /// does: a click anywhere inside the nav control toggles the overlay, a
    /// click anywhere inside a same-page anchor activates the anchor. An
    /// anchor whose target section exists is intercepted (smooth scroll,
    /// overlay closed, no navigation); one without a target falls through to
    /// a recorded navigation. Does nothing before [`Page::enhance`].
    pub fn dispatch_click(&mut self, target: NodeId) {
        let Some(enhancements) = self.enhancements.as_ref() else {
            return;
        };
        let burger = enhancements.burger;
        let nav_links = enhancements.nav_links;
        let anchor_selector = enhancements.anchor_selector.clone();

        // Mobile nav toggle: wired only when both control and container exist.
        if let (Some(burger), Some(nav_links)) = (burger, nav_links)
            && self.dom().ancestors(target).any(|anc| anc == burger)
        {
            let open = self.dom_mut().toggle_class(nav_links, "open");
            trace!("nav overlay toggled, open={open}");
            return;
        }

        let anchor = self
            .dom()
            .ancestors(target)
            .find(|anc| self.dom().matches(*anc, &anchor_selector));
        let Some(anchor) = anchor else {
            return;
        };
        let Some(href) = self.dom().attr(anchor, "href").map(ToOwned::to_owned) else {
            return;
        };

        let target_id = href.trim_start_matches('#');
        if let Some(section) = self.dom().element_by_id(target_id) {
            let top = self
                .geometry()
                .rect(section)
                .map_or(0.0, |rect| rect.top);
            trace!("anchor {href} intercepted, scrolling to {top}");
            if let Some(nav_links) = nav_links {
                self.dom_mut().remove_class(nav_links, "open");
            }
            self.smooth_scroll_to(top);
        } else {
            // No target on this page: the activation would navigate.
            self.push_navigation(href);
        }
    }
}
