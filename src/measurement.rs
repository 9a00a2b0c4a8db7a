//! Point-in-time view of a timer
//!
//! Carries a timer's readings as plain data for structured log output.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::clock::Clock;
use crate::core::ScopedTimer;

/// A timer's state as read at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerMeasurement {
    pub start: DateTime<Local>,
    pub end: Option<DateTime<Local>>,
    pub duration_ns: u64,
    pub duration_ms: f64,
    pub closed: bool,
}

impl<C: Clock> From<&ScopedTimer<C>> for TimerMeasurement {
    fn from(timer: &ScopedTimer<C>) -> Self {
        // One counter read backs both duration fields.
        let duration_ns = timer.duration_ns();
        Self {
            start: timer.start(),
            end: timer.end(),
            duration_ns,
            duration_ms: duration_ns as f64 / 1e6,
            closed: timer.is_closed(),
        }
    }
}

impl<C: Clock> ScopedTimer<C> {
    /// Capture the current readings.
    pub fn measurement(&self) -> TimerMeasurement {
        TimerMeasurement::from(self)
    }
}
