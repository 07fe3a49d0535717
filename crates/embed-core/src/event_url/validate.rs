//! Event URL validation: HTTPS, parseable, at least one path segment.

use thiserror::Error;

/// Why an event URL was rejected. Messages are user-facing; the widget
/// surfaces them verbatim in its error panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Event URL is required and must be a string")]
    Missing,
    #[error("Event URL cannot be empty")]
    Empty,
    #[error("Invalid Pretix URL format. Please provide a valid HTTPS URL (e.g., https://pretix.eu/organizer/ or https://pretix.eu/organizer/event/).")]
    InvalidFormat,
}

/// Checks whether `url` is acceptable as an event URL.
///
/// Accepts both organizer URLs (`https://host/organizer/`, listing several
/// events) and event URLs (`https://host/organizer/event/`); both carry at
/// least one non-empty path segment, which is all the validator requires.
/// Pure predicate, no network activity.
pub fn validate_event_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Missing);
    }
    if url.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if !has_valid_shape(url) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

fn has_valid_shape(url: &str) -> bool {
    let parsed = match url::Url::parse(url) {
        Ok(u) => u,
        Err(_) => return false,
    };

    // pretix shops are HTTPS-only.
    if parsed.scheme() != "https" {
        return false;
    }

    if parsed.host_str().map_or(true, |h| h.is_empty()) {
        return false;
    }

    let segments = parsed.path().split('/').filter(|s| !s.is_empty()).count();
    segments >= 1
}
