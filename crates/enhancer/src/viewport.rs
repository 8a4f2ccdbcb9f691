//! Scroll state for the modeled viewport.

/// How a scroll was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// A recorded scroll request. The viewport jumps immediately either way; the
/// behavior is kept so embedders (and tests) can tell an animated scroll
/// intent from an instant one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// The visible window over the document.
#[derive(Debug)]
pub struct Viewport {
    height: f64,
    scroll_y: f64,
    last_request: Option<ScrollRequest>,
}

impl Viewport {
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            height: height.max(0.0),
            scroll_y: 0.0,
            last_request: None,
        }
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(0.0);
    }

    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Move the viewport, recording the request.
    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let top = top.max(0.0);
        self.scroll_y = top;
        self.last_request = Some(ScrollRequest { top, behavior });
    }

    /// The most recent scroll request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<ScrollRequest> {
        self.last_request
    }
}
