//! Page state: DOM, viewport, geometry and the installed behaviors.

use crate::config::EnhanceConfig;
use crate::enhance::Enhancements;
use crate::geometry::{GeometryMap, LayoutRect};
use crate::url::fetch_bytes;
use crate::viewport::{ScrollBehavior, Viewport};
use anyhow::Error;
use dom::{Dom, NodeId};
use log::info;
use url::Url;

/// Default viewport height until the embedder sets one.
const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

/// A loaded page plus everything the enhancement behaviors need.
pub struct Page {
    dom: Dom,
    url: Url,
    config: EnhanceConfig,
    viewport: Viewport,
    geometry: GeometryMap,
    /// Wired behaviors; `None` until [`Page::enhance`] runs.
    pub(crate) enhancements: Option<Enhancements>,
    /// Hrefs the page would have navigated to (non-intercepted activations).
    navigations: Vec<String>,
}

impl Page {
    /// Load a page by fetching and parsing the document at the given URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL scheme is unsupported or the document
    /// cannot be fetched. Parse problems never fail: html5ever recovers.
    pub async fn load(url: Url, config: EnhanceConfig) -> Result<Self, Error> {
        let bytes = fetch_bytes(&url).await?;
        let html = String::from_utf8_lossy(&bytes);
        info!("loaded {} ({} bytes)", url, bytes.len());
        Ok(Self::from_html(&html, url, config))
    }

    /// Build a page from an in-memory document.
    pub fn from_html(html: &str, url: Url, config: EnhanceConfig) -> Self {
        Self {
            dom: Dom::parse(html),
            url,
            config,
            viewport: Viewport::new(DEFAULT_VIEWPORT_HEIGHT),
            geometry: GeometryMap::default(),
            enhancements: None,
            navigations: Vec::new(),
        }
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn config(&self) -> &EnhanceConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport.set_height(height);
    }

    /// Assign an element's document-space rect.
    pub fn set_rect(&mut self, node: NodeId, rect: LayoutRect) {
        self.geometry.set(node, rect);
    }

    pub fn geometry(&self) -> &GeometryMap {
        &self.geometry
    }

    /// Hrefs of activations that were not intercepted.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub(crate) fn push_navigation(&mut self, href: String) {
        self.navigations.push(href);
    }

    /// Scroll the viewport and let the observers react.
    pub fn scroll_to(&mut self, top: f64) {
        self.viewport.scroll_to(top, ScrollBehavior::Auto);
        self.run_observers();
    }

    pub(crate) fn smooth_scroll_to(&mut self, top: f64) {
        self.viewport.scroll_to(top, ScrollBehavior::Smooth);
        self.run_observers();
    }

    /// Sweep every installed observer against the current viewport.
    pub fn run_observers(&mut self) {
        let Some(enhancements) = self.enhancements.as_mut() else {
            return;
        };
        enhancements
            .spy
            .sweep(&mut self.dom, &self.geometry, &self.viewport);
        enhancements
            .reveal
            .sweep(&mut self.dom, &self.geometry, &self.viewport);
    }

    /// Whether the reveal observer is watching the node. Population uses the
    /// observer to register newly created timeline entries.
    pub fn is_reveal_observed(&self, node: NodeId) -> bool {
        self.enhancements
            .as_ref()
            .is_some_and(|enhancements| enhancements.reveal.is_observing(node))
    }
}
