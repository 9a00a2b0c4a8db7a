//! Scoped Timer Library
//!
//! Measures the elapsed time of one block of work. A timer reads a wall clock
//! for display and a monotonic counter for all duration math, and can be
//! queried both while its scope is still running and after it has closed.

pub mod clock;
pub mod core;
pub mod measurement;

pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::core::guard::TimerGuard;
pub use crate::core::ScopedTimer;
pub use crate::measurement::TimerMeasurement;

/// Library version
pub const VERSION: &str = "1.0.0";
