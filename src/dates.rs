//! Date range generation
//!
//! Produces the calendar dates to query, most recent first. The upper bound on
//! the number of days is a CLI concern and is not enforced here.

use crate::DateKey;
use chrono::{Days, Local, NaiveDate};

/// Date range errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateRangeError {
    /// Zero days requested
    #[error("day count must be at least 1")]
    EmptyRange,

    /// Subtracting the offset fell outside the supported calendar
    #[error("cannot go back {offset} days from {today}")]
    OutOfRange {
        /// Start date
        today: NaiveDate,
        /// Offset in days
        offset: u32,
    },
}

/// Last `day_count` days ending at `today`, newest first
///
/// Entry `i` is `today - i` days.
pub fn last_days(today: NaiveDate, day_count: u32) -> Result<Vec<DateKey>, DateRangeError> {
    if day_count == 0 {
        return Err(DateRangeError::EmptyRange);
    }

    (0..day_count)
        .map(|offset| {
            today
                .checked_sub_days(Days::new(u64::from(offset)))
                .map(DateKey::new)
                .ok_or(DateRangeError::OutOfRange { today, offset })
        })
        .collect()
}

/// Last `day_count` days ending at the local current date
pub fn generate(day_count: u32) -> Result<Vec<DateKey>, DateRangeError> {
    last_days(Local::now().date_naive(), day_count)
}
