//! Field extraction operators
//!
//! Implements: DateTimeComponentFrom for year, month, ISO week, day of week,
//! day of month, day of year, hour, minute, second, millisecond; YearMonth.

use chrono::Datelike;
use weekyear_types::{CalendarDate, CalendarDateTime, DateTimeField};

/// Extract one component of a date-time
///
/// Week of year is the ISO-8601 week; day of week counts Monday = 1 ...
/// Sunday = 7. A date promoted with `CalendarDateTime::from_date` reports zero
/// for every time-of-day field.
pub fn extract_field(value: &CalendarDateTime, field: DateTimeField) -> i32 {
    let date = value.date();
    match field {
        DateTimeField::Year => date.year(),
        DateTimeField::Month => date.month() as i32,
        DateTimeField::WeekOfYear => date.as_naive().iso_week().week() as i32,
        DateTimeField::DayOfWeek => date.day_of_week() as i32,
        DateTimeField::DayOfMonth => date.day() as i32,
        DateTimeField::DayOfYear => date.ordinal() as i32,
        DateTimeField::Hour => value.hour() as i32,
        DateTimeField::Minute => value.minute() as i32,
        DateTimeField::Second => value.second() as i32,
        DateTimeField::Millisecond => value.millisecond() as i32,
    }
}

/// `year * 100 + month`
pub fn year_month(date: CalendarDate) -> i64 {
    i64::from(date.year()) * 100 + i64::from(date.month())
}
