// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Single-threaded timer scheduling on a simulated clock.
//!
//! Every timed behavior in the app is a state machine that owns one
//! [`Timer`] and is driven by calling [`Scheduled::advance`] with the
//! current frame time. Nothing sleeps; the app only asks each machine
//! when it next wants to wake and requests a repaint for that moment.

use std::time::Duration;

/// A single pending deadline, measured from app start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Duration>,
}

impl Timer {
    /// Create a timer with nothing scheduled.
    pub fn idle() -> Self {
        Self { deadline: None }
    }

    /// Schedule the timer `delay` after `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// If the deadline has passed, clear it and return it.
    pub fn fire(&mut self, now: Duration) -> Option<Duration> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}

/// A state machine driven by timer callbacks.
pub trait Scheduled {
    /// Apply every transition that is due at `now`.
    fn advance(&mut self, now: Duration);

    /// When the machine next needs to run, if ever.
    fn next_wake(&self) -> Option<Duration>;
}

/// Earliest of several optional wake times.
pub fn earliest_wake<I>(wakes: I) -> Option<Duration>
where
    I: IntoIterator<Item = Option<Duration>>,
{
    wakes.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_fire_only_after_deadline() {
        let mut timer = Timer::idle();
        timer.schedule(ms(100), ms(50));

        assert_eq!(timer.fire(ms(149)), None);
        assert!(timer.is_pending());
        assert_eq!(timer.fire(ms(150)), Some(ms(150)));
        assert!(!timer.is_pending());
        assert_eq!(timer.fire(ms(500)), None);
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let mut timer = Timer::idle();
        timer.schedule(ms(0), ms(1000));
        timer.schedule(ms(0), ms(10));

        assert_eq!(timer.deadline(), Some(ms(10)));
    }

    #[test]
    fn test_cancel() {
        let mut timer = Timer::idle();
        timer.schedule(ms(0), ms(10));
        timer.cancel();

        assert_eq!(timer.fire(ms(100)), None);
    }

    #[test]
    fn test_earliest_wake() {
        assert_eq!(earliest_wake([None, Some(ms(30)), Some(ms(20))]), Some(ms(20)));
        assert_eq!(earliest_wake([None, None]), None);
    }
}
