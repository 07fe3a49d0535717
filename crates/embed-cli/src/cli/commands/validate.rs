//! `pretix-embed validate <url>` – check an event URL.

use anyhow::Result;
use pretix_embed_core::event_url::validate_event_url;

pub fn run_validate(url: &str) -> Result<()> {
    match validate_event_url(url) {
        Ok(()) => {
            println!("OK: {url}");
            Ok(())
        }
        Err(e) => anyhow::bail!("invalid event URL: {e}"),
    }
}
