//! Deduplicated, process-wide resource loading.
//!
//! The loader owns the global load registry: a completed set of URLs whose
//! resource finished loading at least once, and an in-flight map of loads
//! that have started but not yet settled. Any number of widget instances
//! may request the same URL; exactly one fetch happens and every requester
//! observes the shared outcome.

mod http;
mod registry;
mod transport;

pub use http::HttpTransport;
pub use transport::{ResourceTransport, TransportError};

use crate::document::ResourceKind;
use registry::Registry;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::watch;

fn kind_label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Stylesheet => "CSS",
        ResourceKind::Script => "JavaScript",
    }
}

/// Error observed by every waiter of a failed load. Clonable so the shared
/// outcome can fan out through the watch channel.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The transport could not fetch the resource.
    #[error("Failed to load {}: {url}", kind_label(*kind))]
    Fetch {
        kind: ResourceKind,
        url: String,
        #[source]
        source: TransportError,
    },
    /// The loading task stopped without reporting an outcome.
    #[error("Failed to load {}: {url} (load abandoned)", kind_label(*kind))]
    Abandoned { kind: ResourceKind, url: String },
}

type LoadOutcome = Option<Result<(), LoadError>>;

struct LoaderInner {
    transport: Arc<dyn ResourceTransport>,
    registry: Mutex<Registry>,
}

/// Handle to the shared load registry. Cheap to clone; all clones share
/// the same completed set and in-flight map.
#[derive(Clone)]
pub struct ResourceLoader {
    inner: Arc<LoaderInner>,
}

impl ResourceLoader {
    pub fn new(transport: Arc<dyn ResourceTransport>) -> Self {
        Self {
            inner: Arc::new(LoaderInner {
                transport,
                registry: Mutex::new(Registry::default()),
            }),
        }
    }

    /// Ensure the stylesheet at `url` is attached, loading it if needed.
    pub async fn ensure_stylesheet(&self, url: &str) -> Result<(), LoadError> {
        self.ensure(ResourceKind::Stylesheet, url).await
    }

    /// Ensure the script at `url` is attached, loading it if needed.
    pub async fn ensure_script(&self, url: &str) -> Result<(), LoadError> {
        self.ensure(ResourceKind::Script, url).await
    }

    /// True if `url` has finished loading successfully this process lifetime.
    pub fn is_completed(&self, url: &str) -> bool {
        self.lock_registry().is_completed(url)
    }

    /// True if a load for `url` has started but not yet settled.
    pub fn is_in_flight(&self, url: &str) -> bool {
        self.lock_registry().is_in_flight(url)
    }

    async fn ensure(&self, kind: ResourceKind, url: &str) -> Result<(), LoadError> {
        let (load_id, mut rx) = {
            // Check-then-register happens under one lock acquisition with no
            // await point, so a second caller can never start a duplicate
            // fetch between the check and the registration.
            let mut reg = self.lock_registry();
            if reg.is_completed(url) {
                return Ok(());
            }
            match reg.attach(url) {
                Some(attached) => attached,
                None => {
                    let (tx, rx) = watch::channel(None);
                    let id = reg.begin(url, rx.clone());
                    self.spawn_load(tx, kind, url.to_string());
                    (id, rx)
                }
            }
        };

        loop {
            if let Some(result) = rx.borrow_and_update().clone() {
                return result;
            }
            if rx.changed().await.is_err() {
                // Sender dropped without settling (loading task panicked).
                // Clear the entry only if it is still this load's; another
                // waiter may have cleaned up and begun a fresh load already.
                self.lock_registry().abandon(url, load_id);
                return Err(LoadError::Abandoned {
                    kind,
                    url: url.to_string(),
                });
            }
        }
    }

    /// The load runs as a detached task: dropping the requester (e.g. a
    /// widget unmount) does not abort an in-flight load, so later mounts
    /// still benefit from it completing.
    fn spawn_load(&self, tx: watch::Sender<LoadOutcome>, kind: ResourceKind, url: String) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tracing::debug!(%url, kind = %kind, "loading widget resource");
            let result = inner
                .transport
                .fetch(kind, &url)
                .await
                .map_err(|source| LoadError::Fetch {
                    kind,
                    url: url.clone(),
                    source,
                });

            {
                let mut reg = inner.registry.lock().unwrap_or_else(|e| e.into_inner());
                reg.finish(&url, result.is_ok());
            }

            match &result {
                Ok(()) => tracing::debug!(%url, "widget resource loaded"),
                Err(e) => tracing::warn!(%url, error = %e, "widget resource load failed"),
            }
            let _ = tx.send(Some(result));
        });
    }

    fn lock_registry(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.inner.registry.lock().unwrap_or_else(|e| e.into_inner())
    }
}
