//! Transport seam: how a resource URL becomes an attached tag.
//!
//! The loader only depends on this trait; tests substitute a fake and the
//! CLI injects [`super::HttpTransport`].

use crate::document::ResourceKind;
use async_trait::async_trait;
use thiserror::Error;

/// Why a single resource fetch failed. Clonable so the loader can fan the
/// failure out to every waiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Network-level failure (DNS, connect, timeout, TLS). Carries the
    /// underlying message since curl errors are not clonable.
    #[error("network error: {0}")]
    Network(String),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// Fetches one resource and attaches its tag to the host page.
///
/// Implementations must be safe to call once per URL; the loader's registry
/// guarantees they are never invoked twice concurrently for the same URL.
#[async_trait]
pub trait ResourceTransport: Send + Sync {
    async fn fetch(&self, kind: ResourceKind, url: &str) -> Result<(), TransportError>;
}
