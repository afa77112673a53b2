//! Source of the current calendar month.

use chrono::{Datelike, Local, Month};

use crate::month;

/// Something that knows what month it is.
pub trait Clock {
    /// The current calendar month.
    fn current_month(&self) -> Month;
}

/// Reads the month from the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> Month {
        month::from_index(i64::from(Local::now().month0()))
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Month);

impl Clock for FixedClock {
    fn current_month(&self) -> Month {
        self.0
    }
}
