//! Cancellable deadline timers driven by the event loop
//!
//! Both timers hold a deadline instead of a thread or task. The event loop
//! polls them with the current `Instant`, so cancellation is just clearing
//! the deadline and no callback can fire after it.

use std::time::{Duration, Instant};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Single-shot timer with restart semantics.
///
/// Arming an already armed timer moves the deadline; it never queues a
/// second expiry.
#[derive(Debug, Clone, Default)]
pub struct OneShotTimer {
    deadline: Option<Instant>,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once, when `now` reaches the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Fixed-rate repeating timer.
///
/// Deadlines advance by whole periods from the start instant, so a late poll
/// does not drift the schedule.
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    period: Duration,
    next: Option<Instant>,
}

impl PeriodicTimer {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts (or restarts) the timer; the first tick is due one period
    /// after `now`. A zero period never ticks.
    pub fn start(&mut self, now: Instant) {
        self.next = if self.period.is_zero() {
            None
        } else {
            Some(now + self.period)
        };
    }

    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Number of ticks elapsed up to `now`; consumes them. Constant time no
    /// matter how long the loop was away.
    pub fn due_ticks(&mut self, now: Instant) -> u64 {
        let Some(next) = self.next else {
            return 0;
        };
        let period = self.period.as_nanos();
        if now < next || period == 0 {
            return 0;
        }

        let ticks = (now - next).as_nanos() / period + 1;
        let advance = ticks * period;
        let advance = Duration::new(
            u64::try_from(advance / NANOS_PER_SEC).unwrap_or(u64::MAX),
            (advance % NANOS_PER_SEC) as u32,
        );
        self.next = next.checked_add(advance);
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }
}
