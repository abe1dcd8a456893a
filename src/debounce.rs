use std::time::{Duration, Instant};

/// Coalescing window for search keystrokes
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(150);

/// Coalesces rapid query keystrokes into one recompute.
///
/// Single slot, last-write-wins: `submit` replaces any pending query and
/// re-arms the deadline, `poll` hands the query back once the deadline has
/// passed. The caller supplies the clock, so the event loop stays
/// single-threaded and tests stay deterministic — there is no timer thread
/// to cancel, only this one slot.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(Instant, String)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    /// Replace any pending query and restart the delay window from `now`.
    pub fn submit(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some((now + self.delay, query.into()));
    }

    /// Take the pending query if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, q)| q),
            _ => None,
        }
    }

    /// Drop any pending query without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(SEARCH_DEBOUNCE)
    }
}
