//! Hook into the externally hosted widget runtime.

/// Entry point the ticketing script exposes on the page once loaded. The
/// widget calls it after reaching `Ready` so placeholders get scanned and
/// built. Injected rather than looked up from ambient globals, so tests
/// and headless callers can substitute their own.
pub trait WidgetRuntime: Send + Sync {
    /// Scan the page for placeholder elements and build widgets into them.
    fn build_widgets(&self);
}

/// Stands in when the page has no widget runtime; silently does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRuntime;

impl WidgetRuntime for NoopRuntime {
    fn build_widgets(&self) {}
}
