//! `pretix-embed resources <url>` – print derived widget resource URLs.

use anyhow::Result;
use pretix_embed_core::event_url::{validate_event_url, ResourceSet};

pub fn run_resources(url: &str, json: bool) -> Result<()> {
    validate_event_url(url).map_err(|e| anyhow::anyhow!("invalid event URL: {e}"))?;

    let set = ResourceSet::derive(url);
    if !set.is_complete() {
        anyhow::bail!("failed to derive resource URLs for {url}");
    }

    if json {
        let out = serde_json::json!({
            "event": url,
            "stylesheet": set.stylesheet,
            "script": set.script,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("stylesheet: {}", set.stylesheet);
        println!("script:     {}", set.script);
    }
    Ok(())
}
