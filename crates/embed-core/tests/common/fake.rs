//! Controllable in-memory transport for integration tests.

use async_trait::async_trait;
use pretix_embed_core::document::{DocumentHead, ResourceKind};
use pretix_embed_core::loader::{ResourceTransport, TransportError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Transport that records fetches into a shared [`DocumentHead`], can hold
/// a matching URL until released, and can fail matching URLs on demand.
pub struct FakeTransport {
    pub document: Arc<DocumentHead>,
    pub fetches: AtomicUsize,
    /// URLs containing this substring wait for [`FakeTransport::release`].
    pub hold_substring: Option<&'static str>,
    pub release: Notify,
    /// While set, URLs containing this substring fail with HTTP 404.
    pub fail_substring: Option<&'static str>,
    pub failing: AtomicBool,
}

impl FakeTransport {
    pub fn new(document: Arc<DocumentHead>) -> Self {
        Self {
            document,
            fetches: AtomicUsize::new(0),
            hold_substring: None,
            release: Notify::new(),
            fail_substring: None,
            failing: AtomicBool::new(false),
        }
    }

    pub fn holding(mut self, substring: &'static str) -> Self {
        self.hold_substring = Some(substring);
        self
    }

    pub fn failing_on(mut self, substring: &'static str) -> Self {
        self.fail_substring = Some(substring);
        self.failing = AtomicBool::new(true);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceTransport for FakeTransport {
    async fn fetch(&self, kind: ResourceKind, url: &str) -> Result<(), TransportError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(s) = self.hold_substring {
            if url.contains(s) {
                self.release.notified().await;
            }
        }

        if let Some(s) = self.fail_substring {
            if url.contains(s) && self.failing.load(Ordering::SeqCst) {
                return Err(TransportError::Http(404));
            }
        }

        self.document.append(kind, url);
        Ok(())
    }
}
