//! `pretix-embed snippet <url>` – emit embed markup for a page.

use anyhow::Result;
use pretix_embed_core::config::EmbedConfig;
use pretix_embed_core::event_url::validate_event_url;
use pretix_embed_core::widget::{render, ListType, WidgetOptions};

pub fn run_snippet(
    cfg: &EmbedConfig,
    url: &str,
    subevent: Option<String>,
    list_type: Option<ListType>,
    skip_ssl_check: bool,
    disable_iframe: bool,
) -> Result<()> {
    // Invalid URLs still produce output: the same error panel a widget
    // would render, fallback link included when plausible.
    if let Err(e) = validate_event_url(url) {
        println!("{}", render::error_panel(url, &e.to_string()));
        return Ok(());
    }

    let options = WidgetOptions {
        subevent,
        list_type: list_type.unwrap_or(cfg.list_type),
        skip_ssl_check: skip_ssl_check || cfg.skip_ssl_check,
        disable_iframe: disable_iframe || cfg.disable_iframe,
    };
    println!("{}", render::embed_markup(url, &options));
    Ok(())
}
