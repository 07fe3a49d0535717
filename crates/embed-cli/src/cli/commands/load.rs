//! `pretix-embed load <url>` – mount widget(s) against the real transport.

use anyhow::Result;
use pretix_embed_core::config::EmbedConfig;
use pretix_embed_core::document::DocumentHead;
use pretix_embed_core::loader::{HttpTransport, ResourceLoader};
use pretix_embed_core::widget::{NoopRuntime, Widget, WidgetOptions, WidgetState};
use std::sync::Arc;

pub async fn run_load(cfg: &EmbedConfig, url: &str, instances: usize) -> Result<()> {
    let head = Arc::new(DocumentHead::new());
    let transport = Arc::new(HttpTransport::new(Arc::clone(&head), &cfg.transport()));
    let loader = ResourceLoader::new(transport);
    let options = WidgetOptions {
        subevent: None,
        list_type: cfg.list_type,
        skip_ssl_check: cfg.skip_ssl_check,
        disable_iframe: cfg.disable_iframe,
    };

    // Mount all instances concurrently; the shared loader deduplicates the
    // underlying fetches.
    let mut handles = Vec::new();
    for i in 0..instances.max(1) {
        let mut widget = Widget::mount(
            url,
            options.clone(),
            loader.clone(),
            Arc::new(NoopRuntime),
        );
        handles.push(tokio::spawn(async move { (i, widget.load().await.clone()) }));
    }

    let mut failed = false;
    for handle in handles {
        let (i, state) = handle.await?;
        match state {
            WidgetState::Ready => println!("instance {i}: ready"),
            WidgetState::Error { message } => {
                failed = true;
                println!("instance {i}: error: {message}");
            }
            WidgetState::Loading => unreachable!("load() settles the state"),
        }
    }

    for tag in head.snapshot() {
        println!("attached {}: {}", tag.kind, tag.url);
    }

    if failed {
        anyhow::bail!("one or more widget instances failed to load");
    }
    Ok(())
}
