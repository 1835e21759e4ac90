//! Week-numbering operators
//!
//! Implements: ISO week-year (from chrono), legacy MySQL mode-0 year-week,
//! exact MySQL mode-0 year-week, and the last-week-has-a-Sunday test the
//! legacy computation is built on.

use chrono::{Datelike, NaiveDate, Weekday};
use weekyear_types::{CalendarDate, WeekYearPair};

/// Length of the Gregorian cycle; weekdays and leap years repeat after it
const GREGORIAN_CYCLE_YEARS: i32 = 400;

/// First year of the cycle used to evaluate out-of-range years
const REFERENCE_CYCLE_START: i32 = 2000;

/// Whether one of December 28-31 of `year` falls on a Sunday
///
/// Defined for every `i32` year. Years chrono cannot represent are checked on
/// the equivalent year of the reference cycle.
pub fn has_sunday_in_last_week(year: i32) -> bool {
    let year = REFERENCE_CYCLE_START + year.rem_euclid(GREGORIAN_CYCLE_YEARS);
    (28..=31).any(|day| {
        NaiveDate::from_ymd_opt(year, 12, day).is_some_and(|d| d.weekday() == Weekday::Sun)
    })
}

/// ISO-8601 (week-year, week) of `date`
pub fn iso_week_year(date: CalendarDate) -> WeekYearPair {
    let week = date.as_naive().iso_week();
    WeekYearPair::new(week.year(), week.week())
}

/// ISO-8601 week-year and week packed as `weekyear * 100 + week`
pub fn iso_year_week(date: CalendarDate) -> i64 {
    iso_week_year(date).packed()
}

/// Legacy MySQL mode-0 (year, week) of `date`
///
/// Derived from the ISO week and the position of Sundays at the end of the
/// two preceding years:
///
/// - no Sunday in Dec 28-31 of the previous year: the ISO week, in the
///   calendar year of `date`
/// - otherwise, ISO weeks after the first shift down by one, and ISO week 1
///   goes to week 52 or 53 of the previous calendar year (53 unless the year
///   before that also has a Sunday in Dec 28-31)
///
/// This is not the exact `YEARWEEK(date, 0)` rule; see
/// [`mysql_mode0_week_year`] for that.
pub fn mysql_week_year(date: CalendarDate) -> WeekYearPair {
    // Sundays are evaluated as themselves, not as the following Monday.
    let iso_week = date.as_naive().iso_week().week();
    let last_year = date.year() - 1;

    if !has_sunday_in_last_week(last_year) {
        return WeekYearPair::new(date.year(), iso_week);
    }
    if iso_week > 1 {
        return WeekYearPair::new(date.year(), iso_week - 1);
    }

    let week = if has_sunday_in_last_week(last_year - 1) { 52 } else { 53 };
    WeekYearPair::new(last_year, week)
}

/// Legacy MySQL mode-0 year-week as a single integer
///
/// The week is appended without zero padding, so single-digit weeks give a
/// five-digit value for four-digit years (`2013-02-14` is `20136`).
pub fn mysql_year_week(date: CalendarDate) -> i64 {
    mysql_week_year(date).concatenated()
}

/// Exact MySQL `YEARWEEK(date, 0)` as a (year, week) pair
///
/// Weeks start on Sunday and belong to the year their Sunday falls in; days
/// before the first Sunday of January are in the last week of December.
pub fn mysql_mode0_week_year(date: CalendarDate) -> WeekYearPair {
    let ordinal0 = date.ordinal() - 1;
    let since_sunday = date.weekday().num_days_from_sunday();

    if since_sunday <= ordinal0 {
        return WeekYearPair::new(date.year(), (ordinal0 - since_sunday) / 7 + 1);
    }

    let previous = date.year() - 1;
    let sunday_ordinal0 = days_in_year(previous) + ordinal0 - since_sunday;
    WeekYearPair::new(previous, sunday_ordinal0 / 7 + 1)
}

/// Exact MySQL `YEARWEEK(date, 0)` packed as `year * 100 + week`
pub fn mysql_mode0_year_week(date: CalendarDate) -> i64 {
    mysql_mode0_week_year(date).packed()
}

fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
