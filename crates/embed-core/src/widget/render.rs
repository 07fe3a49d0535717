//! Per-state markup for a widget instance.
//!
//! Error renders an inline panel with a direct fallback link whenever the
//! URL at least looks like HTTPS, so failure degrades to "open the shop in
//! a new tab" rather than a dead block. Ready renders the placeholder
//! element the external runtime scans for, plus a noscript fallback.

use super::{Widget, WidgetOptions, WidgetState};

/// Render a widget according to its current state.
pub fn render(widget: &Widget) -> String {
    match widget.state() {
        WidgetState::Error { message } => error_panel(widget.event_url(), message),
        WidgetState::Loading => loading_placeholder(),
        WidgetState::Ready => embed_markup(widget.event_url(), widget.options()),
    }
}

/// Inline error panel. The fallback link is emitted only when the URL
/// plausibly points somewhere (starts with `https://`).
pub fn error_panel(event_url: &str, message: &str) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"pretix-widget-error\">\n");
    out.push_str("  <p>Error loading ticket widget</p>\n");
    if !message.is_empty() {
        out.push_str(&format!("  <p>{}</p>\n", escape_text(message)));
    }
    if event_url.starts_with("https://") {
        out.push_str(&format!(
            "  <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Visit event page directly</a>\n",
            escape_attr(event_url)
        ));
    }
    out.push_str("</div>");
    out
}

/// Spinner shown while resources load.
pub fn loading_placeholder() -> String {
    "<div class=\"pretix-widget-loading\">\n  <div class=\"spinner\"></div>\n  <p>Loading ticket information...</p>\n</div>"
        .to_string()
}

/// The placeholder element plus noscript fallback for the Ready state.
pub fn embed_markup(event_url: &str, options: &WidgetOptions) -> String {
    let subevent = options.subevent.as_deref().unwrap_or("");
    format!(
        "<div class=\"pretix-widget-container\">\n  <pretix-widget event=\"{event}\" subevent=\"{subevent}\" list-type=\"{list_type}\" skip-ssl-check=\"{skip_ssl}\" disable-iframe=\"{disable_iframe}\"></pretix-widget>\n  <noscript>\n    <p>JavaScript is required to display the ticket widget.</p>\n    <a href=\"{event}\" target=\"_blank\" rel=\"noopener noreferrer\">View tickets on Pretix</a>\n  </noscript>\n</div>",
        event = escape_attr(event_url),
        subevent = escape_attr(subevent),
        list_type = options.list_type,
        skip_ssl = options.skip_ssl_check,
        disable_iframe = options.disable_iframe,
    )
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::ListType;

    #[test]
    fn embed_markup_carries_all_attributes() {
        let options = WidgetOptions {
            subevent: Some("42".to_string()),
            list_type: ListType::Calendar,
            skip_ssl_check: true,
            disable_iframe: false,
        };
        let html = embed_markup("https://pretix.eu/myorg/myevent/", &options);
        assert!(html.contains("event=\"https://pretix.eu/myorg/myevent/\""));
        assert!(html.contains("subevent=\"42\""));
        assert!(html.contains("list-type=\"calendar\""));
        assert!(html.contains("skip-ssl-check=\"true\""));
        assert!(html.contains("disable-iframe=\"false\""));
        assert!(html.contains("<noscript>"));
    }

    #[test]
    fn embed_markup_defaults() {
        let html = embed_markup("https://pretix.eu/org/", &WidgetOptions::default());
        assert!(html.contains("subevent=\"\""));
        assert!(html.contains("list-type=\"list\""));
        assert!(html.contains("skip-ssl-check=\"false\""));
    }

    #[test]
    fn error_panel_links_back_for_https_urls() {
        let html = error_panel("https://pretix.eu/myorg/", "Widget loading error: x");
        assert!(html.contains("Error loading ticket widget"));
        assert!(html.contains("Widget loading error: x"));
        assert!(html.contains("href=\"https://pretix.eu/myorg/\""));
    }

    #[test]
    fn error_panel_omits_link_for_implausible_urls() {
        let html = error_panel("http://insecure.example/", "message");
        assert!(!html.contains("href="));
        let html = error_panel("", "Event URL is required and must be a string");
        assert!(!html.contains("href="));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let html = error_panel("https://pretix.eu/a\"b/", "msg");
        assert!(html.contains("https://pretix.eu/a&quot;b/"));
        let html = embed_markup("https://pretix.eu/<org>/", &WidgetOptions::default());
        assert!(html.contains("https://pretix.eu/&lt;org&gt;/"));
    }

    #[test]
    fn loading_placeholder_mentions_tickets() {
        assert!(loading_placeholder().contains("Loading ticket information"));
    }

    #[tokio::test]
    async fn render_follows_the_widget_state() {
        use crate::document::ResourceKind;
        use crate::loader::{ResourceLoader, ResourceTransport, TransportError};
        use crate::widget::{NoopRuntime, Widget};
        use async_trait::async_trait;
        use std::sync::Arc;

        struct AlwaysOk;

        #[async_trait]
        impl ResourceTransport for AlwaysOk {
            async fn fetch(&self, _: ResourceKind, _: &str) -> Result<(), TransportError> {
                Ok(())
            }
        }

        let loader = ResourceLoader::new(Arc::new(AlwaysOk));
        let mut widget = Widget::mount(
            "https://pretix.eu/myorg/myevent/",
            WidgetOptions::default(),
            loader.clone(),
            Arc::new(NoopRuntime),
        );
        assert!(render(&widget).contains("pretix-widget-loading"));

        widget.load().await;
        let html = render(&widget);
        assert!(html.contains("event=\"https://pretix.eu/myorg/myevent/\""));

        let mut broken = Widget::mount("", WidgetOptions::default(), loader, Arc::new(NoopRuntime));
        broken.load().await;
        assert!(render(&broken).contains("Error loading ticket widget"));
    }
}
