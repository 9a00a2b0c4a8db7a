//! Property-based checks against the host clocks. Every case sleeps, so case
//! counts are kept small.

mod common;

use std::thread;
use std::time::Duration;

use proptest::prelude::*;
use scoped_timer::ScopedTimer;

use common::{assert_at_least_about, millis};

fn pause() -> impl Strategy<Value = Duration> {
    (1u64..=10_000_000).prop_map(Duration::from_nanos)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // Two live samples separated by a sleep strictly increase.
    #[test]
    fn open_timer_grows(d in pause()) {
        let timer = ScopedTimer::open();
        let first = timer.duration_ns();
        thread::sleep(d);
        let second = timer.duration_ns();
        prop_assert!(second > first);
        prop_assert!(second - first >= u64::try_from(d.as_nanos()).unwrap());
    }

    // Live reading inside the scope differs from the final one.
    #[test]
    fn incomplete_differs_from_complete(d in pause()) {
        let (incomplete, timer) = ScopedTimer::time(|timer| {
            thread::sleep(d);
            let incomplete = timer.duration_ms();
            thread::sleep(d);
            incomplete
        });
        assert_at_least_about(incomplete, millis(d), 0.1);
        prop_assert!(timer.duration_ms() > incomplete);
        assert_at_least_about(timer.duration_ms(), millis(d) * 2.0, 0.1);
    }

    #[test]
    fn views_agree_after_close(d in pause()) {
        let (_, timer) = ScopedTimer::time(|_| thread::sleep(d));
        let ns = timer.duration_ns();
        prop_assert!((timer.duration_ms() - ns as f64 / 1e6).abs() <= 1e-9 * timer.duration_ms().max(1.0));
        let micros = timer.duration().num_microseconds().unwrap();
        prop_assert!((micros as f64 - ns as f64 / 1e3).abs() <= 0.5);
        prop_assert_eq!(timer.duration_ms(), timer.duration_ms());
    }

    #[test]
    fn nested_timers_are_independent(outer in pause(), inner in pause()) {
        let (inner_timer, outer_timer) = ScopedTimer::time(|_| {
            thread::sleep(outer);
            let (_, inner_timer) = ScopedTimer::time(|_| thread::sleep(inner));
            inner_timer
        });
        assert_at_least_about(inner_timer.duration_ms(), millis(inner), 0.1);
        assert_at_least_about(outer_timer.duration_ms(), millis(outer + inner), 0.1);
        prop_assert!(outer_timer.duration_ns() > inner_timer.duration_ns());
        prop_assert!(outer_timer.start_counter() < inner_timer.start_counter());
        prop_assert!(outer_timer.end_counter() > inner_timer.end_counter());
    }
}
