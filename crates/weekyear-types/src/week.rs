//! Week-year pairs and their integer encodings

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (year, week) result of a week-numbering convention
///
/// `week` is always in `1..=53` when produced by the engine. The `year` is the
/// year the convention assigns the week to, which can differ from the
/// calendar year of the date near year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekYearPair {
    pub year: i32,
    pub week: u32,
}

impl WeekYearPair {
    pub const fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    /// `year * 100 + week`, the six-digit `YYYYWW` form for four-digit years
    pub fn packed(&self) -> i64 {
        i64::from(self.year) * 100 + i64::from(self.week)
    }

    /// The decimal digits of `year` followed by the digits of `week`
    ///
    /// The week is not zero-padded: week 5 of 2013 is `20135`, not `201305`.
    /// Legacy mode-0 output is built this way; use [`packed`](Self::packed)
    /// when a fixed-width value is needed.
    pub fn concatenated(&self) -> i64 {
        let scale = if self.week >= 10 { 100 } else { 10 };
        let magnitude = i64::from(self.year).abs() * scale + i64::from(self.week);
        if self.year < 0 { -magnitude } else { magnitude }
    }
}

/// `YYYY-Www`, with the year written the way `chrono` writes date years:
/// four digits in `0..=9999`, otherwise signed and at least four digits
impl fmt::Display for WeekYearPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}-W{:02}", self.year, self.week)
        } else {
            write!(f, "{:+05}-W{:02}", self.year, self.week)
        }
    }
}
