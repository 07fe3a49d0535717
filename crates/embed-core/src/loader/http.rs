//! Production transport: fetch the resource over HTTPS with curl, then
//! record the tag in the document head.
//!
//! Uses the curl crate (libcurl) with redirects and timeouts; the blocking
//! transfer runs under `spawn_blocking` so the loader stays async.

use super::transport::{ResourceTransport, TransportError};
use crate::config::TransportConfig;
use crate::document::{DocumentHead, ResourceKind};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub struct HttpTransport {
    document: Arc<DocumentHead>,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl HttpTransport {
    pub fn new(document: Arc<DocumentHead>, cfg: &TransportConfig) -> Self {
        Self {
            document,
            connect_timeout: cfg.connect_timeout(),
            request_timeout: cfg.request_timeout(),
        }
    }
}

#[async_trait]
impl ResourceTransport for HttpTransport {
    async fn fetch(&self, kind: ResourceKind, url: &str) -> Result<(), TransportError> {
        let url_owned = url.to_string();
        let connect = self.connect_timeout;
        let request = self.request_timeout;

        tokio::task::spawn_blocking(move || fetch_blocking(&url_owned, connect, request))
            .await
            .map_err(|e| TransportError::Network(format!("fetch task failed: {e}")))??;

        // The tag is appended only after a successful fetch, so the head
        // never carries entries for resources that failed to load.
        self.document.append(kind, url);
        Ok(())
    }
}

fn curl_err(e: curl::Error) -> TransportError {
    TransportError::Network(e.to_string())
}

/// GET the resource and discard the body; only reachability and status
/// matter. Runs in the current thread; call from `spawn_blocking` when
/// used from async code.
fn fetch_blocking(url: &str, connect: Duration, request: Duration) -> Result<(), TransportError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.connect_timeout(connect).map_err(curl_err)?;
    easy.timeout(request).map_err(curl_err)?;

    let mut bytes: usize = 0;
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                bytes += data.len();
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let code = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&code) {
        return Err(TransportError::Http(code));
    }

    tracing::debug!(%url, bytes, "fetched widget resource");
    Ok(())
}
