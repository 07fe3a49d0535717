//! Registry state: completed set + in-flight map, keyed by full URL.

use super::LoadOutcome;
use std::collections::{HashMap, HashSet};
use tokio::sync::watch;

/// One in-flight load. The id distinguishes this load from any later load
/// of the same URL, so stale cleanup cannot remove the wrong entry.
struct InFlight {
    id: u64,
    rx: watch::Receiver<LoadOutcome>,
}

/// Process-lifetime load state. Completed entries are never evicted; the
/// widget resources are assumed static for the session.
#[derive(Default)]
pub(super) struct Registry {
    completed: HashSet<String>,
    in_flight: HashMap<String, InFlight>,
    next_load_id: u64,
}

impl Registry {
    pub(super) fn is_completed(&self, url: &str) -> bool {
        self.completed.contains(url)
    }

    pub(super) fn is_in_flight(&self, url: &str) -> bool {
        self.in_flight.contains_key(url)
    }

    /// Attach to an existing in-flight load, if any.
    pub(super) fn attach(&self, url: &str) -> Option<(u64, watch::Receiver<LoadOutcome>)> {
        self.in_flight.get(url).map(|f| (f.id, f.rx.clone()))
    }

    /// Record a load as started and return its id. The caller must have
    /// checked absence under the same lock acquisition.
    pub(super) fn begin(&mut self, url: &str, rx: watch::Receiver<LoadOutcome>) -> u64 {
        self.next_load_id += 1;
        let id = self.next_load_id;
        self.in_flight.insert(url.to_string(), InFlight { id, rx });
        id
    }

    /// Settle a load: drop the in-flight entry and, on success, promote the
    /// URL into the completed set. Failures are not recorded, so a later
    /// request starts a fresh load. Called only by the loading task that
    /// owns the entry.
    pub(super) fn finish(&mut self, url: &str, success: bool) {
        self.in_flight.remove(url);
        if success {
            self.completed.insert(url.to_string());
        }
    }

    /// Drop the in-flight entry for `url`, but only while it still belongs
    /// to load `load_id`. A waiter cleaning up after a dead loading task
    /// must not remove an entry a fresh load has since registered.
    pub(super) fn abandon(&mut self, url: &str, load_id: u64) {
        if self.in_flight.get(url).map_or(false, |f| f.id == load_id) {
            self.in_flight.remove(url);
        }
    }
}
