//! Calendar values - validated proleptic Gregorian dates and date-times
//!
//! Both types are `Copy` and immutable. Invalid input never gets past the
//! constructors, so everything downstream is total.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use weekyear_diagnostics::{DateError, DateParseError, InvalidDateError, InvalidTimeError};

/// A proleptic Gregorian calendar date without time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date, failing when the day does not exist
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, InvalidDateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(InvalidDateError::new(year, month, day))
    }

    /// Parse from ISO 8601 date text (`YYYY-MM-DD`)
    /// Also handles @ prefix: @2024-01-15
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let text = s.trim();
        let text = text.strip_prefix('@').unwrap_or(text);

        // A leading minus belongs to the year, not to a separator
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let parts: Vec<&str> = body.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateParseError::new(s, "expected YYYY-MM-DD").into());
        };

        let year: i32 = parse_component(s, year, "year")?;
        let month = parse_component(s, month, "month")?;
        let day = parse_component(s, day, "day")?;
        let year = if negative { -year } else { year };

        Ok(Self::new(year, month, day)?)
    }

    /// The underlying chrono date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of the year, starting at 1
    pub fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// ISO day-of-week number: Monday = 1 ... Sunday = 7
    pub fn day_of_week(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    pub fn is_sunday(&self) -> bool {
        self.0.weekday() == Weekday::Sun
    }

    /// The following day, if it is still representable
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// The preceding day, if it is still representable
    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Iterate over every day from `self` to `end`, both inclusive
    pub fn days_through(self, end: CalendarDate) -> impl Iterator<Item = CalendarDate> {
        self.0
            .iter_days()
            .take_while(move |d| *d <= end.0)
            .map(Self)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A calendar date plus a time of day with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDateTime {
    date: CalendarDate,
    time: NaiveTime,
}

impl CalendarDateTime {
    /// Create a date-time with full precision
    pub fn new(
        date: CalendarDate,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, InvalidTimeError> {
        let invalid = InvalidTimeError {
            hour,
            minute,
            second,
            millisecond,
        };
        // chrono accepts 1000-1999 ms as a leap second; we do not
        if millisecond > 999 {
            return Err(invalid);
        }
        let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond).ok_or(invalid)?;
        Ok(Self { date, time })
    }

    /// The date at midnight
    pub fn from_date(date: CalendarDate) -> Self {
        Self {
            date,
            time: NaiveTime::MIN,
        }
    }

    /// Parse `YYYY-MM-DDTHH:MM[:SS[.fff]]`, or a bare date at midnight
    ///
    /// Fractions longer than three digits are truncated to milliseconds.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let text = s.trim();
        let Some((date_part, time_part)) = text.split_once(['T', ' ']) else {
            return Ok(Self::from_date(CalendarDate::parse(text)?));
        };
        let date = CalendarDate::parse(date_part)?;

        let (hms, fraction) = match time_part.split_once('.') {
            Some((hms, fraction)) => (hms, Some(fraction)),
            None => (time_part, None),
        };
        let fields: Vec<&str> = hms.split(':').collect();
        let (hour, minute, second) = match fields.as_slice() {
            [h, m] => (
                parse_component(s, h, "hour")?,
                parse_component(s, m, "minute")?,
                0,
            ),
            [h, m, sec] => (
                parse_component(s, h, "hour")?,
                parse_component(s, m, "minute")?,
                parse_component(s, sec, "second")?,
            ),
            _ => return Err(DateParseError::new(s, "expected HH:MM[:SS[.fff]]").into()),
        };

        let millisecond = match fraction {
            None => 0,
            Some(digits) if fields.len() == 3 => {
                let digits: String = digits.chars().take(3).collect();
                let scale = 10u32.pow(3 - digits.len() as u32);
                parse_component::<u32>(s, &digits, "millisecond")? * scale
            }
            Some(_) => return Err(DateParseError::new(s, "fraction without seconds").into()),
        };

        Ok(Self::new(date, hour, minute, second, millisecond)?)
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.time.nanosecond() / 1_000_000
    }
}

impl From<CalendarDate> for CalendarDateTime {
    fn from(date: CalendarDate) -> Self {
        Self::from_date(date)
    }
}

impl FromStr for CalendarDateTime {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}.{:03}",
            self.date,
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

fn parse_component<T: FromStr>(input: &str, digits: &str, name: &str) -> Result<T, DateParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateParseError::new(input, format!("{name} must be digits")));
    }
    digits
        .parse()
        .map_err(|_| DateParseError::new(input, format!("{name} out of range")))
}
