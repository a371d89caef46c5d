//! Clocks and fixed-period repeating tasks
//!
//! Spawn timers are explicit values owned by the lifecycle controller and
//! polled from the tick thread, so every mutation stays on one thread.
//! Arming an armed task is a no-op; disarming drops any pending firings.
//! Missed periods are never queued: a late poll fires once and the schedule
//! skips ahead to the next boundary.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic millisecond time source
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock, measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock; clones share the same time (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self(Rc::new(Cell::new(start_ms)))
    }

    pub fn set(&self, now_ms: u64) {
        self.0.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

/// A repeating timer with a fixed period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTask {
    period_ms: u64,
    /// Next due time; None while disarmed
    next_due_ms: Option<u64>,
}

impl RepeatingTask {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Start the timer; the first firing is one full period after `now_ms`.
    ///
    /// Returns false if the task was already armed (nothing changes).
    pub fn arm(&mut self, now_ms: u64) -> bool {
        if self.is_armed() {
            return false;
        }
        self.next_due_ms = Some(now_ms + self.period_ms);
        true
    }

    pub fn disarm(&mut self) {
        self.next_due_ms = None;
    }

    /// Whether the task fires at `now_ms`.
    ///
    /// Fires at most once per call, then moves the due time to the first
    /// period boundary after `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let missed = (now_ms - due) / self.period_ms + 1;
        self.next_due_ms = Some(due + missed * self.period_ms);
        true
    }
}
