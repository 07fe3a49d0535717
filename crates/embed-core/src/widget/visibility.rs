//! Container visibility observation.
//!
//! Resources load unconditionally and in parallel; observing the container
//! has no effect on loading today. The observer exists as the hook point
//! for future lazy loading, so the lifecycle (observe while loading, stop
//! on a terminal state) is tracked even though visibility changes are
//! ignored.

/// Margin around the container at which it counts as "about to be visible".
pub const DEFAULT_ROOT_MARGIN_PX: u32 = 50;

#[derive(Debug)]
pub struct VisibilityObserver {
    root_margin_px: u32,
    observing: bool,
}

impl VisibilityObserver {
    pub fn new(root_margin_px: u32) -> Self {
        Self {
            root_margin_px,
            observing: false,
        }
    }

    pub fn observe(&mut self) {
        self.observing = true;
    }

    pub fn unobserve(&mut self) {
        self.observing = false;
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn root_margin_px(&self) -> u32 {
        self.root_margin_px
    }

    /// Visibility change callback. Intentionally does nothing: the widget
    /// is already loading (or settled) regardless of visibility.
    pub fn on_visibility(&self, _visible: bool) {}
}
