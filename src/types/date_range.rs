use crate::error::FarmcastError;
use chrono::{Days, NaiveDate};
use std::fmt;

/// An inclusive range of calendar days, used for historical weather and flood queries.
///
/// The forecast query does not use a `DateRange`; it always looks a fixed number of
/// days ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`FarmcastError::InvalidDateRange`] when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FarmcastError> {
        if start > end {
            return Err(FarmcastError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days` days leading up to and including `end`.
    ///
    /// Returns `None` if the start would fall outside the representable calendar.
    pub fn trailing(end: NaiveDate, days: u64) -> Option<Self> {
        let start = end.checked_sub_days(Days::new(days))?;
        Some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}
