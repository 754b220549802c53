//! Time Source
//!
//! Rules never read the system clock directly; callers pass a `Clock`.

use chrono::{Duration, NaiveDate};

/// Source of the current instant and calendar day
pub trait Clock {
    /// Unix time in milliseconds
    fn now_millis(&self) -> i64;

    /// Local calendar date
    fn today(&self) -> NaiveDate;
}

/// A clock frozen at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub millis: i64,
    pub date: NaiveDate,
}

impl FixedClock {
    pub fn new(millis: i64, date: NaiveDate) -> Self {
        Self { millis, date }
    }

    /// Same clock moved forward by whole days
    pub fn advance_days(self, days: i64) -> Self {
        Self {
            millis: self.millis + days * 86_400_000,
            date: self.date + Duration::days(days),
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}
