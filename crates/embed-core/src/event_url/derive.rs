//! Derived resource URLs: widget stylesheet and script.

/// The two resources a widget needs, derived from one event URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSet {
    pub stylesheet: String,
    pub script: String,
}

impl ResourceSet {
    /// Derives both resource URLs. Either field is empty when the event URL
    /// does not parse; callers are expected to have validated it first.
    pub fn derive(event_url: &str) -> Self {
        Self {
            stylesheet: stylesheet_url(event_url),
            script: script_url(event_url),
        }
    }

    /// True when both URLs were derived successfully.
    pub fn is_complete(&self) -> bool {
        !self.stylesheet.is_empty() && !self.script.is_empty()
    }
}

/// Stylesheet URL: the event URL with `widget/v2.css` appended verbatim.
///
/// The shop serves the stylesheet relative to the organizer/event path, so
/// the concatenation must preserve the exact shape of the input (including
/// its trailing slash). Returns an empty string if `event_url` does not
/// parse; never panics.
pub fn stylesheet_url(event_url: &str) -> String {
    if url::Url::parse(event_url).is_err() {
        return String::new();
    }
    format!("{event_url}widget/v2.css")
}

/// Script URL: `<scheme>://<host>/widget/v2.en.js`, served from the shop
/// root regardless of organizer/event path. Returns an empty string if
/// `event_url` does not parse.
pub fn script_url(event_url: &str) -> String {
    let parsed = match url::Url::parse(event_url) {
        Ok(u) => u,
        Err(_) => return String::new(),
    };
    let host = match parsed.host_str() {
        Some(h) => h,
        None => return String::new(),
    };
    format!("{}://{}/widget/v2.en.js", parsed.scheme(), host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_appends_to_event_url() {
        assert_eq!(
            stylesheet_url("https://pretix.eu/myorg/myevent/"),
            "https://pretix.eu/myorg/myevent/widget/v2.css"
        );
        assert_eq!(
            stylesheet_url("https://pretix.eu/myorg/"),
            "https://pretix.eu/myorg/widget/v2.css"
        );
    }

    #[test]
    fn stylesheet_preserves_input_shape() {
        // No trailing slash in the input means no separator is inserted;
        // the path shape downstream depends on exact concatenation.
        assert_eq!(
            stylesheet_url("https://pretix.eu/myorg/myevent"),
            "https://pretix.eu/myorg/myeventwidget/v2.css"
        );
    }

    #[test]
    fn script_is_rooted_at_host() {
        assert_eq!(
            script_url("https://pretix.eu/myorg/myevent/"),
            "https://pretix.eu/widget/v2.en.js"
        );
        assert_eq!(
            script_url("https://tickets.example.com/conf/2026/"),
            "https://tickets.example.com/widget/v2.en.js"
        );
    }

    #[test]
    fn script_drops_port() {
        // Mirrors hostname-based derivation: the port is not carried over.
        assert_eq!(
            script_url("https://pretix.example:8443/org/"),
            "https://pretix.example/widget/v2.en.js"
        );
    }

    #[test]
    fn unparseable_input_yields_empty() {
        assert_eq!(stylesheet_url("not a url"), "");
        assert_eq!(script_url("not a url"), "");
        assert_eq!(stylesheet_url(""), "");
        assert_eq!(script_url(""), "");
    }

    #[test]
    fn derive_bundles_both() {
        let set = ResourceSet::derive("https://pretix.eu/myorg/myevent/");
        assert!(set.is_complete());
        assert_eq!(set.stylesheet, "https://pretix.eu/myorg/myevent/widget/v2.css");
        assert_eq!(set.script, "https://pretix.eu/widget/v2.en.js");

        let broken = ResourceSet::derive("::::");
        assert!(!broken.is_complete());
    }
}
