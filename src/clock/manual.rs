use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};

use super::Clock;

/// Counter value a fresh [`ManualClock`] reports before any advance.
const INITIAL_COUNTER_NS: u64 = 1_000;

/// A clock that only moves when told to.
///
/// Clones share state, so a test can keep one handle and give another to the
/// timer under test. [`advance`](ManualClock::advance) moves both clocks
/// together; [`step_wall`](ManualClock::step_wall) moves only the wall clock,
/// the way an NTP correction would.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: DateTime<Local>,
    counter_ns: Arc<AtomicU64>,
    wall_offset_ns: Arc<AtomicI64>,
}

impl ManualClock {
    /// Create a clock whose wall time starts at `base`.
    pub fn starting_at(base: DateTime<Local>) -> Self {
        Self {
            base,
            counter_ns: Arc::new(AtomicU64::new(INITIAL_COUNTER_NS)),
            wall_offset_ns: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Advance the counter and the wall clock by `by`.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        let _ = self
            .counter_ns
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(nanos))
            });
    }

    /// Shift the wall clock alone, leaving the counter untouched.
    pub fn step_wall(&self, by: TimeDelta) {
        let nanos = by.num_nanoseconds().unwrap_or(i64::MAX);
        let _ = self
            .wall_offset_ns
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(nanos))
            });
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(Local::now())
    }
}

impl Clock for ManualClock {
    fn wall_now(&self) -> DateTime<Local> {
        let elapsed = self.counter_ns.load(Ordering::SeqCst) - INITIAL_COUNTER_NS;
        let elapsed = TimeDelta::nanoseconds(i64::try_from(elapsed).unwrap_or(i64::MAX));
        let offset = TimeDelta::nanoseconds(self.wall_offset_ns.load(Ordering::SeqCst));
        self.base + elapsed + offset
    }

    fn counter_ns(&self) -> u64 {
        self.counter_ns.load(Ordering::SeqCst)
    }
}
