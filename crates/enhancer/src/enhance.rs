//! Behavior wiring: nav toggle, anchor interception, scrollspy, reveal and
//! the year stamp.

use crate::observer::{
    IntersectionEntry, IntersectionObserver, IntersectionSubscriber, ObserverMirror,
    ObserverOptions, RootMargin,
};
use crate::page::Page;
use anyhow::Error;
use chrono::Datelike;
use dom::{Dom, NodeId, Selector};
use log::{debug, warn};

/// The wired-up behavior state held by an enhanced page.
pub(crate) struct Enhancements {
    /// Mobile nav control; toggling requires both control and container.
    pub(crate) burger: Option<NodeId>,
    pub(crate) nav_links: Option<NodeId>,
    pub(crate) anchor_selector: Selector,
    pub(crate) spy: ObserverMirror<Scrollspy>,
    pub(crate) reveal: ObserverMirror<Reveal>,
}

impl Page {
    /// Install the enhancement behaviors on this page.
    ///
    /// Wires the mobile nav toggle, same-page anchor interception, the
    /// scrollspy over `section[id]`, reveal-on-scroll over `.reveal`, and
    /// stamps the current year into `#year`. Missing targets disable only
    /// their own behavior. Installing runs an initial observer sweep, so
    /// sections already in view get their entries delivered immediately.
    ///
    /// # Errors
    ///
    /// Only selector construction can fail, which would mean a programming
    /// error in the wired selectors rather than anything about the page.
    pub fn enhance(&mut self) -> Result<(), Error> {
        let dom = self.dom();
        let burger = dom.select_first(".burger")?;
        let nav_links = dom.select_first(".nav-links")?;
        let anchor_selector = Selector::parse("a[href^=\"#\"]")?;

        let config = self.config();
        let spy_options = ObserverOptions {
            root_margin: RootMargin {
                top_pct: config.spy_margin_top_pct,
                bottom_pct: config.spy_margin_bottom_pct,
            },
            threshold: config.spy_threshold,
        };
        let reveal_options = ObserverOptions {
            root_margin: RootMargin::NONE,
            threshold: config.reveal_threshold,
        };

        let mut spy = ObserverMirror::new(spy_options, Scrollspy::new()?);
        for section in self.dom().select_all("section[id]")? {
            spy.observe(section);
        }

        let mut reveal = ObserverMirror::new(reveal_options, Reveal);
        for element in self.dom().select_all(".reveal")? {
            reveal.observe(element);
        }

        if let Some(year_el) = self.dom().element_by_id("year") {
            let year = chrono::Local::now().year().to_string();
            self.dom_mut().set_text(year_el, &year);
        }

        debug!(
            "enhancer installed: burger={} nav={} anchors wired",
            burger.is_some(),
            nav_links.is_some()
        );

        self.enhancements = Some(Enhancements {
            burger,
            nav_links,
            anchor_selector,
            spy,
            reveal,
        });
        self.run_observers();
        Ok(())
    }

    /// Register a node with the reveal observer so it animates in like
    /// statically authored content.
    pub(crate) fn observe_reveal(&mut self, node: NodeId) {
        if let Some(enhancements) = self.enhancements.as_mut() {
            enhancements.reveal.observe(node);
        }
    }
}

/// Highlights the nav entry matching the section currently inside the
/// visibility band. Exactly one entry is active at a time.
pub(crate) struct Scrollspy {
    nav_links: Selector,
}

impl Scrollspy {
    fn new() -> Result<Self, Error> {
        Ok(Self {
            nav_links: Selector::parse(".nav-links a")?,
        })
    }
}

impl IntersectionSubscriber for Scrollspy {
    fn on_entries(
        &mut self,
        dom: &mut Dom,
        _observer: &mut IntersectionObserver,
        entries: &[IntersectionEntry],
    ) {
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(id) = dom.attr(entry.target, "id").map(ToOwned::to_owned) else {
                continue;
            };
            let link_selector = match Selector::parse(&format!(".nav-links a[href=\"#{id}\"]")) {
                Ok(selector) => selector,
                Err(err) => {
                    warn!("scrollspy skipped section #{id}: {err}");
                    continue;
                }
            };
            let Some(link) = dom.matching(&link_selector).first().copied() else {
                continue;
            };
            for other in dom.matching(&self.nav_links) {
                dom.remove_class(other, "active");
            }
            dom.add_class(link, "active");
        }
    }
}

/// Adds the `in` class the first time an element enters the viewport, then
/// stops watching it. The transition never reverses.
pub(crate) struct Reveal;

impl IntersectionSubscriber for Reveal {
    fn on_entries(
        &mut self,
        dom: &mut Dom,
        observer: &mut IntersectionObserver,
        entries: &[IntersectionEntry],
    ) {
        for entry in entries {
            if entry.is_intersecting {
                dom.add_class(entry.target, "in");
                observer.unobserve(entry.target);
            }
        }
    }
}
