//! Host-page head model: the record of injected resource tags.
//!
//! There is no browser DOM here; the observable side effect of loading a
//! resource is an entry in this list. The loader guarantees at most one
//! tag per distinct URL, which tests assert through [`DocumentHead::tag_count`].

use std::sync::Mutex;

/// Kind of resource tag injected into the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `<link rel="stylesheet">`
    Stylesheet,
    /// `<script async>`
    Script,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Stylesheet => write!(f, "stylesheet"),
            ResourceKind::Script => write!(f, "script"),
        }
    }
}

/// One injected tag. All widget resources are fetched cross-origin
/// anonymous (no credentials sent to the ticketing host).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTag {
    pub kind: ResourceKind,
    pub url: String,
    /// Always "anonymous"; kept explicit so renderers emit the attribute.
    pub cross_origin: &'static str,
    /// Scripts carry the async attribute so they never block the host
    /// page; always false for stylesheets.
    pub is_async: bool,
}

/// Shared, internally synchronized list of injected tags.
///
/// Mutations all happen through [`DocumentHead::append`]; the lock is held
/// only for the duration of a push or a snapshot, never across an await.
#[derive(Debug, Default)]
pub struct DocumentHead {
    tags: Mutex<Vec<ResourceTag>>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an injected tag. Called by the transport once a resource
    /// fetch succeeded; the loader's registry ensures this happens at most
    /// once per URL.
    pub fn append(&self, kind: ResourceKind, url: &str) {
        let tag = ResourceTag {
            kind,
            url: url.to_string(),
            cross_origin: "anonymous",
            is_async: kind == ResourceKind::Script,
        };
        self.tags.lock().unwrap_or_else(|e| e.into_inner()).push(tag);
    }

    /// Number of tags carrying exactly this URL.
    pub fn tag_count(&self, url: &str) -> usize {
        self.tags
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|t| t.url == url)
            .count()
    }

    /// True if any tag carries this URL.
    pub fn contains(&self, url: &str) -> bool {
        self.tag_count(url) > 0
    }

    /// Copy of all tags, in injection order.
    pub fn snapshot(&self) -> Vec<ResourceTag> {
        self.tags.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
