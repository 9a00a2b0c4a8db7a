#![allow(dead_code)] // Each test binary uses a subset of helpers.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honouring `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Sleeps never undershoot, so measured values may only exceed the target
/// (or sit within `rel` of it).
pub fn assert_at_least_about(value: f64, target: f64, rel: f64) {
    assert!(
        value > target || (value - target).abs() <= target * rel,
        "measured {value} is below target {target}"
    );
}

pub fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}
