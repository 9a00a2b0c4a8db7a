//! The interval primitive
//!
//! A [`ScopedTimer`] is opened at the start of a scope and closed once at its
//! exit. While open, duration queries read the counter live; after close they
//! return the same frozen value forever.

pub mod guard;

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};

const NANOS_PER_MILLI: f64 = 1e6;
const NANOS_PER_MICRO: u64 = 1_000;

/// Readings taken at close. Kept together so `end` and `end_counter` can
/// only ever be both present or both absent.
#[derive(Debug, Clone, Copy)]
struct CloseReading {
    wall: DateTime<Local>,
    counter: u64,
}

/// One timed interval.
///
/// `start`/`end` are wall-clock timestamps for display. Every duration is
/// computed from the monotonic counter pair, so stepping the wall clock
/// never changes a measurement.
#[derive(Debug, Clone)]
pub struct ScopedTimer<C = SystemClock> {
    clock: C,
    start: DateTime<Local>,
    start_counter: u64,
    closed: Option<CloseReading>,
}

impl ScopedTimer<SystemClock> {
    /// Open a timer on the host clocks.
    pub fn open() -> Self {
        Self::open_with(SystemClock)
    }
}

impl<C: Clock> ScopedTimer<C> {
    /// Open a timer reading from `clock`.
    pub fn open_with(clock: C) -> Self {
        // Wall clock first: the counter read belongs as close as possible to
        // the start of the timed work.
        let start = clock.wall_now();
        let start_counter = clock.counter_ns();
        trace!(target: "scoped_timer", %start, start_counter, "open");
        Self {
            clock,
            start,
            start_counter,
            closed: None,
        }
    }

    /// Close the interval, freezing every duration query.
    ///
    /// Only the first call records anything; later calls are ignored so the
    /// end readings never change once set.
    pub fn close(&mut self) {
        if self.closed.is_some() {
            trace!(target: "scoped_timer", start_counter = self.start_counter, "close_ignored");
            return;
        }
        // Counter first, mirroring open.
        let counter = self.clock.counter_ns();
        let wall = self.clock.wall_now();
        self.closed = Some(CloseReading { wall, counter });
        debug!(
            target: "scoped_timer",
            duration_ns = counter.saturating_sub(self.start_counter),
            "close"
        );
    }

    /// Elapsed nanoseconds: frozen once closed, live while open.
    pub fn duration_ns(&self) -> u64 {
        let end_counter = match self.closed {
            Some(reading) => reading.counter,
            None => self.clock.counter_ns(),
        };
        end_counter.saturating_sub(self.start_counter)
    }

    /// Elapsed milliseconds, derived from [`duration_ns`](Self::duration_ns).
    pub fn duration_ms(&self) -> f64 {
        self.duration_ns() as f64 / NANOS_PER_MILLI
    }

    /// Elapsed time as a calendar delta, rounded to the nearest microsecond.
    pub fn duration(&self) -> TimeDelta {
        Self::to_time_delta(self.duration_ns())
    }

    /// Elapsed time as a `std::time::Duration`, without rounding.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.duration_ns())
    }

    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    pub fn start_counter(&self) -> u64 {
        self.start_counter
    }

    /// Wall-clock time of close, `None` while open.
    pub fn end(&self) -> Option<DateTime<Local>> {
        self.closed.map(|reading| reading.wall)
    }

    /// Counter reading at close, `None` while open.
    pub fn end_counter(&self) -> Option<u64> {
        self.closed.map(|reading| reading.counter)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.is_some()
    }

    fn to_time_delta(duration_ns: u64) -> TimeDelta {
        let micros = duration_ns / NANOS_PER_MICRO + u64::from(duration_ns % NANOS_PER_MICRO >= 500);
        TimeDelta::microseconds(i64::try_from(micros).unwrap_or(i64::MAX))
    }
}

impl<C: Clock> fmt::Display for ScopedTimer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const STAMP: &str = "%Y-%m-%d %H:%M:%S%.3f";
        write!(f, "{} -> ", self.start.format(STAMP))?;
        match self.end() {
            Some(end) => write!(f, "{}", end.format(STAMP))?,
            None => f.write_str("running")?,
        }
        write!(f, " ({:.3} ms)", self.duration_ms())
    }
}
