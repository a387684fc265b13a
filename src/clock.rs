// Time sources for suppression deadlines. Deadlines are compared lazily, never scheduled.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::types::Timestamp;

/// Source of "now" for the arbiter.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Monotonic wall clock, measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        let us = u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX);
        Timestamp::from_micros(us)
    }
}

/// Hand-driven clock. Clones share the same time, so a test can keep one
/// handle while the arbiter owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        ManualClock {
            now: Rc::new(Cell::new(start.as_micros())),
        }
    }

    pub fn set(&self, ts: Timestamp) {
        self.now.set(ts.as_micros());
    }

    pub fn advance_millis(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms.saturating_mul(1000)));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_micros(self.now.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn manual_clones_share_time() {
        let clock = ManualClock::new(Timestamp::from_millis(10));
        let handle = clock.clone();
        handle.advance_millis(5);
        assert_eq!(clock.now(), Timestamp::from_millis(15));
        handle.set(Timestamp::from_micros(3));
        assert_eq!(clock.now().as_micros(), 3);
    }
}
