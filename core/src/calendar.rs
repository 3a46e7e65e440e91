//! Calendar arithmetic for SLA math.
//!
//! Business-day offsets are applied by walking one calendar day at a
//! time and counting only Mon-Fri. There is no holiday table: the model
//! excludes weekends only. This stepper is the single source of
//! business-day semantics; due dates and completion dates must both go
//! through it or the breach flags stop meaning anything.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// True for Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advance `date` by `days` business days. Negative `days` walks
/// backwards. The starting date itself is never counted, so a Friday
/// plus one business day is the following Monday.
pub fn add_business_days(date: NaiveDate, days: i64) -> NaiveDate {
    let step = if days >= 0 { 1 } else { -1 };
    let mut remaining = days.abs();
    let mut current = date;
    while remaining > 0 {
        current += Duration::days(step);
        if is_business_day(current) {
            remaining -= 1;
        }
    }
    current
}

/// Truncate to the first day of the month.
pub fn month_floor(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}
