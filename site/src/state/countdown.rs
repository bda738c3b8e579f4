//! Time remaining until the batch starts.
//!
//! The display is re-derived from the target and the current time on every
//! tick; nothing is accumulated between ticks.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use chrono::{DateTime, FixedOffset, Utc};

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Whole days/hours/minutes/seconds left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Remaining time from `now` until `target`, or `None` once the target
    /// has been reached.
    #[must_use]
    pub fn between(target: DateTime<FixedOffset>, now: DateTime<Utc>) -> Option<Self> {
        let remaining_ms = target.timestamp_millis() - now.timestamp_millis();
        if remaining_ms <= 0 {
            return None;
        }
        let total = remaining_ms / 1000;
        Some(Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        })
    }
}

/// Countdown display plus whether it has frozen at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownState {
    pub target: DateTime<FixedOffset>,
    pub remaining: Countdown,
    pub finished: bool,
}

impl CountdownState {
    #[must_use]
    pub fn new(target: DateTime<FixedOffset>, now: DateTime<Utc>) -> Self {
        let mut state = Self { target, remaining: Countdown::default(), finished: false };
        state.tick(now);
        state
    }

    /// Recompute from `now`. Returns `false` once the countdown has finished
    /// and the timer driving it can stop; a finished countdown never changes.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.finished {
            return false;
        }
        match Countdown::between(self.target, now) {
            Some(remaining) => {
                self.remaining = remaining;
                true
            }
            None => {
                self.remaining = Countdown::default();
                self.finished = true;
                false
            }
        }
    }
}
