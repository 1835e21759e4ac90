//! Field extraction tests
//!
//! Tests for: extract_field over every DateTimeField, year_month

use chrono::{Datelike, NaiveDate, Timelike};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use weekyear_eval::{extract_field, year_month};
use weekyear_types::{CalendarDate, CalendarDateTime, DateTimeField};

fn datetime(s: &str) -> CalendarDateTime {
    CalendarDateTime::parse(s).unwrap()
}

#[rstest]
#[case(DateTimeField::Year, 2016)]
#[case(DateTimeField::Month, 1)]
#[case(DateTimeField::WeekOfYear, 53)]
#[case(DateTimeField::DayOfWeek, 7)]
#[case(DateTimeField::DayOfMonth, 3)]
#[case(DateTimeField::DayOfYear, 3)]
#[case(DateTimeField::Hour, 21)]
#[case(DateTimeField::Minute, 45)]
#[case(DateTimeField::Second, 9)]
#[case(DateTimeField::Millisecond, 120)]
fn test_extract_field(#[case] field: DateTimeField, #[case] expected: i32) {
    let value = datetime("2016-01-03T21:45:09.120");
    assert_eq!(extract_field(&value, field), expected);
}

#[test]
fn test_extract_time_fields_from_date() {
    let value = CalendarDateTime::from(CalendarDate::new(2020, 2, 29).unwrap());
    for field in DateTimeField::ALL.into_iter().filter(|f| f.is_time_field()) {
        assert_eq!(extract_field(&value, field), 0, "{field}");
    }
    assert_eq!(extract_field(&value, DateTimeField::DayOfYear), 60);
}

#[test]
fn test_year_month() {
    assert_eq!(year_month(CalendarDate::new(2015, 1, 4).unwrap()), 201501);
    assert_eq!(year_month(CalendarDate::new(2015, 12, 31).unwrap()), 201512);
}

proptest! {
    #[test]
    fn prop_fields_match_chrono(
        year in 1i32..=9999,
        ordinal in 1u32..=365,
        seconds in 0u32..86_400,
        millis in 0u32..1000,
    ) {
        let naive = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let date = CalendarDate::from(naive);
        let value = CalendarDateTime::new(date, seconds / 3600, seconds / 60 % 60, seconds % 60, millis).unwrap();
        let time = naive.and_hms_milli_opt(seconds / 3600, seconds / 60 % 60, seconds % 60, millis).unwrap();

        prop_assert_eq!(extract_field(&value, DateTimeField::Year), naive.year());
        prop_assert_eq!(extract_field(&value, DateTimeField::Month), naive.month() as i32);
        prop_assert_eq!(extract_field(&value, DateTimeField::WeekOfYear), naive.iso_week().week() as i32);
        prop_assert_eq!(extract_field(&value, DateTimeField::DayOfWeek), naive.weekday().number_from_monday() as i32);
        prop_assert_eq!(extract_field(&value, DateTimeField::DayOfMonth), naive.day() as i32);
        prop_assert_eq!(extract_field(&value, DateTimeField::DayOfYear), ordinal as i32);
        prop_assert_eq!(extract_field(&value, DateTimeField::Hour), time.hour() as i32);
        prop_assert_eq!(extract_field(&value, DateTimeField::Minute), time.minute() as i32);
        prop_assert_eq!(extract_field(&value, DateTimeField::Second), time.second() as i32);
        prop_assert_eq!(extract_field(&value, DateTimeField::Millisecond), millis as i32);
    }
}
