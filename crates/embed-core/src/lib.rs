pub mod config;
pub mod logging;

pub mod document;
pub mod event_url;
pub mod loader;
pub mod widget;
