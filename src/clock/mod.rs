//! Clock sources for interval measurement
//!
//! A timer consumes two independent readings from its host: a wall clock,
//! which is human-meaningful but may be stepped (NTP, DST), and a monotonic
//! counter, which never runs backward and is the only input to duration math.

mod manual;

use std::time::Instant;

use chrono::{DateTime, Local};

pub use manual::ManualClock;

/// The pair of time sources a [`ScopedTimer`](crate::ScopedTimer) reads.
///
/// `counter_ns` must be non-decreasing for the lifetime of the process and
/// cheap enough to call twice per interval.
pub trait Clock {
    /// Current wall-clock time. Informational only.
    fn wall_now(&self) -> DateTime<Local>;

    /// Nanoseconds since an arbitrary, process-local reference point.
    fn counter_ns(&self) -> u64;
}

lazy_static::lazy_static! {
    static ref COUNTER_ANCHOR: Instant = Instant::now();
}

/// The host clocks: `chrono::Local` for the wall clock and `std::time::Instant`
/// for the monotonic counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn wall_now(&self) -> DateTime<Local> {
        Local::now()
    }

    #[inline]
    fn counter_ns(&self) -> u64 {
        // Saturates after ~584 years of process uptime.
        u64::try_from(COUNTER_ANCHOR.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}
