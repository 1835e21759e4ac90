//! Week-numbering operator tests
//!
//! Tests for: has_sunday_in_last_week, iso_week_year, iso_year_week,
//! mysql_week_year, mysql_year_week, mysql_mode0_week_year

use chrono::{Datelike, NaiveDate, Weekday};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use weekyear_eval::{
    has_sunday_in_last_week, iso_week_year, iso_year_week, mysql_mode0_week_year,
    mysql_mode0_year_week, mysql_week_year, mysql_year_week,
};
use weekyear_types::{CalendarDate, WeekYearPair};

// ============================================================================
// Test Helpers
// ============================================================================

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

fn pair(year: i32, week: u32) -> WeekYearPair {
    WeekYearPair::new(year, week)
}

fn sunday_in_dec_28_to_31(year: i32) -> bool {
    (28..=31).any(|d| NaiveDate::from_ymd_opt(year, 12, d).unwrap().weekday() == Weekday::Sun)
}

fn days(from: CalendarDate, to: CalendarDate) -> impl Iterator<Item = CalendarDate> {
    from.days_through(to)
}

// ============================================================================
// has_sunday_in_last_week
// ============================================================================

#[test]
fn test_has_sunday_in_last_week_matches_calendar_2000_to_2050() {
    for year in 2000..=2050 {
        assert_eq!(has_sunday_in_last_week(year), sunday_in_dec_28_to_31(year), "year {year}");
    }
}

#[rstest]
#[case(2012, true)] // Dec 30 is a Sunday
#[case(2014, true)] // Dec 28
#[case(2015, false)]
#[case(2016, false)]
#[case(2017, true)] // Dec 31
#[case(2020, false)]
fn test_has_sunday_in_last_week_known_years(#[case] year: i32, #[case] expected: bool) {
    assert_eq!(has_sunday_in_last_week(year), expected);
}

proptest! {
    #[test]
    fn prop_has_sunday_in_last_week_matches_chrono(year in -200_000i32..200_000) {
        prop_assert_eq!(has_sunday_in_last_week(year), sunday_in_dec_28_to_31(year));
    }

    #[test]
    fn prop_has_sunday_in_last_week_repeats_every_400_years(year in any::<i32>()) {
        let next = year.wrapping_add(400);
        prop_assume!(next > year);
        prop_assert_eq!(has_sunday_in_last_week(year), has_sunday_in_last_week(next));
    }
}

// ============================================================================
// Legacy mode 0
// ============================================================================

#[rstest]
#[case(date(2000, 1, 1), pair(2000, 52))]
// Sunday: evaluated as itself, not as the following Monday
#[case(date(2016, 1, 3), pair(2016, 53))]
#[case(date(2014, 12, 28), pair(2014, 51))]
// ISO week 1 of 2015 starts on Monday 2014-12-29
#[case(date(2014, 12, 29), pair(2013, 52))]
#[case(date(2014, 12, 30), pair(2013, 52))]
#[case(date(2014, 12, 31), pair(2013, 52))]
#[case(date(2015, 1, 1), pair(2014, 52))]
#[case(date(2015, 1, 2), pair(2014, 52))]
#[case(date(2015, 1, 3), pair(2014, 52))]
#[case(date(2015, 1, 4), pair(2014, 52))]
#[case(date(2015, 1, 5), pair(2015, 1))]
// Leap years ending on different weekdays
#[case(date(2012, 12, 31), pair(2012, 1))]
#[case(date(2016, 12, 31), pair(2016, 52))]
#[case(date(2020, 12, 31), pair(2020, 52))]
// ISO week 53 of the previous week-year, previous year without a late Sunday
#[case(date(2021, 1, 1), pair(2021, 53))]
#[case(date(2018, 1, 1), pair(2017, 53))]
fn test_mysql_week_year_reference_dates(#[case] input: CalendarDate, #[case] expected: WeekYearPair) {
    assert_eq!(mysql_week_year(input), expected, "{input}");
}

#[rstest]
#[case(date(2000, 1, 1), 200052)]
#[case(date(2015, 1, 1), 201452)]
#[case(date(2014, 12, 29), 201352)]
#[case(date(2015, 6, 15), 201524)]
// Single-digit weeks are appended unpadded
#[case(date(2015, 1, 5), 20151)]
#[case(date(2013, 2, 14), 20136)]
#[case(date(2012, 12, 31), 20121)]
fn test_mysql_year_week_concatenation(#[case] input: CalendarDate, #[case] expected: i64) {
    assert_eq!(mysql_year_week(input), expected, "{input}");
}

#[test]
fn test_mysql_year_week_agrees_with_mysql_mid_year() {
    // Away from year boundaries legacy and exact mode 0 coincide
    for input in [date(2015, 6, 15), date(2024, 6, 15), date(2021, 3, 10), date(2016, 12, 31)] {
        assert_eq!(mysql_week_year(input), mysql_mode0_week_year(input), "{input}");
    }
}

#[test]
fn test_mysql_week_year_weeks_in_range_over_decades() {
    for input in days(date(1970, 1, 1), date(2070, 12, 31)) {
        let result = mysql_week_year(input);
        assert!((1..=53).contains(&result.week), "{input} -> {result}");
        assert!(result.year == input.year() || result.year == input.year() - 1, "{input} -> {result}");
    }
}

// ============================================================================
// Exact mode 0
// ============================================================================

#[rstest]
#[case(date(1987, 1, 1), 198652)]
#[case(date(2000, 1, 1), 199952)]
#[case(date(2000, 1, 2), 200001)]
#[case(date(2012, 12, 30), 201253)]
#[case(date(2012, 12, 31), 201253)]
#[case(date(2014, 12, 28), 201452)]
#[case(date(2015, 1, 3), 201452)]
#[case(date(2015, 1, 4), 201501)]
#[case(date(2016, 1, 3), 201601)]
#[case(date(2016, 12, 31), 201652)]
#[case(date(2017, 12, 31), 201753)]
#[case(date(2020, 12, 31), 202052)]
#[case(date(2024, 12, 31), 202452)]
fn test_mysql_mode0_reference_dates(#[case] input: CalendarDate, #[case] expected: i64) {
    assert_eq!(mysql_mode0_year_week(input), expected, "{input}");
}

#[test]
fn test_mysql_mode0_weeks_start_on_sunday() {
    for input in days(date(1990, 1, 1), date(2030, 12, 31)) {
        let result = mysql_mode0_week_year(input);
        assert!((1..=53).contains(&result.week), "{input} -> {result}");

        let Some(next) = input.succ() else { continue };
        let following = mysql_mode0_week_year(next);
        if next.is_sunday() {
            assert_ne!(following, result, "{next} should open a new week");
        } else {
            assert_eq!(following, result, "{next} should stay in the week of {input}");
        }
    }
}

// ============================================================================
// ISO
// ============================================================================

#[rstest]
#[case(date(2016, 1, 3), pair(2015, 53), 201553)]
#[case(date(2014, 12, 29), pair(2015, 1), 201501)]
#[case(date(2021, 1, 1), pair(2020, 53), 202053)]
#[case(date(2024, 6, 15), pair(2024, 24), 202424)]
fn test_iso_week_year(#[case] input: CalendarDate, #[case] expected: WeekYearPair, #[case] packed: i64) {
    assert_eq!(iso_week_year(input), expected);
    assert_eq!(iso_year_week(input), packed);
}

proptest! {
    #[test]
    fn prop_iso_year_week_matches_chrono(year in 1600i32..2400, ordinal in 1u32..=365) {
        let naive = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let iso = naive.iso_week();
        let expected = i64::from(iso.year()) * 100 + i64::from(iso.week());
        prop_assert_eq!(iso_year_week(CalendarDate::from(naive)), expected);
    }

    #[test]
    fn prop_week_numbering_is_pure(year in 1600i32..2400, ordinal in 1u32..=365) {
        let input = CalendarDate::from(NaiveDate::from_yo_opt(year, ordinal).unwrap());
        prop_assert_eq!(mysql_year_week(input), mysql_year_week(input));
        prop_assert_eq!(mysql_mode0_year_week(input), mysql_mode0_year_week(input));
        prop_assert_eq!(iso_year_week(input), iso_year_week(input));
    }

    #[test]
    fn prop_weeks_in_range(year in -9999i32..=9999, ordinal in 1u32..=365) {
        let input = CalendarDate::from(NaiveDate::from_yo_opt(year, ordinal).unwrap());
        for result in [mysql_week_year(input), mysql_mode0_week_year(input), iso_week_year(input)] {
            prop_assert!((1..=53).contains(&result.week), "{} -> {}", input, result);
        }
    }
}
