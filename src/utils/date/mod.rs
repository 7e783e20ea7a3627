// Date utility functions

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Whole minutes from `from` to `to` (negative if `to` is earlier).
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_minutes()
}

/// Whole days from `from` to `to` (negative if `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Minutes elapsed since midnight for a time of day.
pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}
