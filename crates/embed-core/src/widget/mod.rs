//! Widget instance lifecycle: Loading → Ready or Loading → Error.
//!
//! Each mounted widget validates its event URL, derives the stylesheet and
//! script URLs, loads both through the shared [`ResourceLoader`] and, once
//! both have settled successfully, signals the page's widget runtime.
//! Ready and Error are terminal for a given mount; a changed URL means a
//! fresh mount, not a transition.

pub mod render;

mod runtime;
mod visibility;

pub use runtime::{NoopRuntime, WidgetRuntime};
pub use visibility::{VisibilityObserver, DEFAULT_ROOT_MARGIN_PX};

use crate::event_url::{validate_event_url, ResourceSet};
use crate::loader::ResourceLoader;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// How the widget lists events: flat list, month calendar, or week view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    List,
    Calendar,
    Week,
}

impl ListType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListType::List => "list",
            ListType::Calendar => "calendar",
            ListType::Week => "week",
        }
    }
}

impl std::fmt::Display for ListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(ListType::List),
            "calendar" => Ok(ListType::Calendar),
            "week" => Ok(ListType::Week),
            other => Err(format!(
                "unknown list type {other:?} (expected list, calendar, or week)"
            )),
        }
    }
}

/// Pass-through attributes for the placeholder element.
#[derive(Debug, Clone, Default)]
pub struct WidgetOptions {
    /// Specific sub-event id for event series.
    pub subevent: Option<String>,
    pub list_type: ListType,
    /// Tell the widget to skip SSL verification of the shop.
    pub skip_ssl_check: bool,
    /// Always open the ticket shop in a new tab instead of an iframe.
    pub disable_iframe: bool,
}

/// Instance state. Ready and Error are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    Loading,
    Ready,
    Error { message: String },
}

impl WidgetState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WidgetState::Loading)
    }
}

/// One mounted widget. Independent of the global registry; any number of
/// instances may share one [`ResourceLoader`].
pub struct Widget {
    event_url: String,
    options: WidgetOptions,
    state: WidgetState,
    loader: ResourceLoader,
    runtime: Arc<dyn WidgetRuntime>,
    visibility: VisibilityObserver,
}

impl Widget {
    /// Mount a widget: enters `Loading` and starts observing the container
    /// for visibility. Loading itself happens in [`Widget::load`].
    pub fn mount(
        event_url: impl Into<String>,
        options: WidgetOptions,
        loader: ResourceLoader,
        runtime: Arc<dyn WidgetRuntime>,
    ) -> Self {
        let mut visibility = VisibilityObserver::new(DEFAULT_ROOT_MARGIN_PX);
        visibility.observe();
        Self {
            event_url: event_url.into(),
            options,
            state: WidgetState::Loading,
            loader,
            runtime,
            visibility,
        }
    }

    pub fn event_url(&self) -> &str {
        &self.event_url
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn visibility(&self) -> &VisibilityObserver {
        &self.visibility
    }

    /// Drive the instance to a terminal state.
    ///
    /// Validation failures surface synchronously with no network activity.
    /// Otherwise the stylesheet and script load in parallel; `Ready`
    /// requires both (partial success stays an error). Calling `load`
    /// again after a terminal state is a no-op.
    pub async fn load(&mut self) -> &WidgetState {
        if self.state.is_terminal() {
            return &self.state;
        }

        if let Err(e) = validate_event_url(&self.event_url) {
            self.settle_error(e.to_string());
            return &self.state;
        }

        let resources = ResourceSet::derive(&self.event_url);
        if !resources.is_complete() {
            self.settle_error("Widget loading error: Failed to generate resource URLs".into());
            return &self.state;
        }

        let (css, js) = tokio::join!(
            self.loader.ensure_stylesheet(&resources.stylesheet),
            self.loader.ensure_script(&resources.script),
        );

        match css.and(js) {
            Ok(()) => self.settle_ready(),
            Err(e) => self.settle_error(format!("Widget loading error: {e}")),
        }
        &self.state
    }

    fn settle_ready(&mut self) {
        self.state = WidgetState::Ready;
        self.visibility.unobserve();
        // Best-effort: a NoopRuntime stands in when the page has no widget
        // runtime, so absence is never an error.
        self.runtime.build_widgets();
    }

    fn settle_error(&mut self, message: String) {
        tracing::warn!(url = %self.event_url, %message, "widget failed");
        self.state = WidgetState::Error { message };
        self.visibility.unobserve();
    }
}
