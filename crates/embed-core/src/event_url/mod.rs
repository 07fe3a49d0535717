//! Event URL validation and resource derivation.
//!
//! An event URL points at a pretix organizer page (multiple events) or a
//! single event page. Both the widget stylesheet and script URLs are pure
//! functions of it.

mod derive;
mod validate;

pub use derive::{script_url, stylesheet_url, ResourceSet};
pub use validate::{validate_event_url, ValidationError};
