//! Guaranteed close on scope exit
//!
//! [`TimerGuard`] closes its timer from `Drop`, so the end readings are taken
//! on every exit path: normal completion, early return, `?` propagation and
//! panic unwinding. `time` and `time_async` wrap the common case.

use std::future::Future;
use std::ops::Deref;

use crate::clock::{Clock, SystemClock};
use crate::core::ScopedTimer;

/// Borrows an open timer and closes it when dropped.
///
/// Derefs to the timer, so live durations can be read inside the scope.
#[must_use = "the timer closes as soon as the guard is dropped"]
#[derive(Debug)]
pub struct TimerGuard<'a, C: Clock = SystemClock> {
    timer: &'a mut ScopedTimer<C>,
}

impl<C: Clock> Deref for TimerGuard<'_, C> {
    type Target = ScopedTimer<C>;

    fn deref(&self) -> &Self::Target {
        &*self.timer
    }
}

impl<C: Clock> Drop for TimerGuard<'_, C> {
    fn drop(&mut self) {
        self.timer.close();
    }
}

impl<C: Clock> ScopedTimer<C> {
    /// Tie this timer's close to the lifetime of the returned guard.
    pub fn guard(&mut self) -> TimerGuard<'_, C> {
        TimerGuard { timer: self }
    }

    /// Time `f` on `clock`, handing back its output untouched together with
    /// the closed timer.
    pub fn time_with<R>(clock: C, f: impl FnOnce(&ScopedTimer<C>) -> R) -> (R, Self) {
        let mut timer = Self::open_with(clock);
        let output = {
            let guard = timer.guard();
            f(&guard)
        };
        (output, timer)
    }

    /// Time `future` on `clock`. The timer opens on first poll and closes
    /// when the future completes, or when this future is dropped early.
    pub async fn time_async_with<F: Future>(clock: C, future: F) -> (F::Output, Self) {
        let mut timer = Self::open_with(clock);
        let output = {
            let _guard = timer.guard();
            future.await
        };
        (output, timer)
    }
}

impl ScopedTimer<SystemClock> {
    /// Time `f` on the host clocks.
    ///
    /// ```
    /// use scoped_timer::ScopedTimer;
    ///
    /// let (parsed, timer) = ScopedTimer::time(|_| "42".parse::<u32>());
    /// assert_eq!(parsed, Ok(42));
    /// assert!(timer.is_closed());
    /// ```
    pub fn time<R>(f: impl FnOnce(&ScopedTimer) -> R) -> (R, Self) {
        Self::time_with(SystemClock, f)
    }

    /// Time `future` on the host clocks.
    pub async fn time_async<F: Future>(future: F) -> (F::Output, Self) {
        Self::time_async_with(SystemClock, future).await
    }
}
