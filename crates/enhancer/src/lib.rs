//! Page enhancement engine for static portfolio/CV sites.
//!
//! This crate owns a loaded page: its DOM, a modeled viewport with
//! embedder-provided element geometry, and the intersection observers the
//! enhancement behaviors hang off. Installing the enhancer wires the mobile
//! nav toggle, smooth anchor scrolling, the scrollspy, reveal-on-scroll and
//! the footer year stamp; population fetches the profile document and renders the
//! CV sections into their containers.

pub mod config;
mod enhance;
pub mod events;
pub mod geometry;
pub mod observer;
mod page;
mod populate;
/// Byte fetching for http, https and file URLs.
mod url;
pub mod viewport;

pub use config::EnhanceConfig;
pub use crate::url::fetch_bytes;
pub use page::Page;
