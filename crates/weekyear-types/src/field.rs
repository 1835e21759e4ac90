//! Date/time components that can be extracted from a calendar value

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A component of a date or date-time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeField {
    Year,
    Month,
    /// ISO-8601 week of the week-year
    WeekOfYear,
    /// ISO numbering: Monday = 1 ... Sunday = 7
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl DateTimeField {
    pub const ALL: [DateTimeField; 10] = [
        DateTimeField::Year,
        DateTimeField::Month,
        DateTimeField::WeekOfYear,
        DateTimeField::DayOfWeek,
        DateTimeField::DayOfMonth,
        DateTimeField::DayOfYear,
        DateTimeField::Hour,
        DateTimeField::Minute,
        DateTimeField::Second,
        DateTimeField::Millisecond,
    ];

    /// Canonical snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            DateTimeField::Year => "year",
            DateTimeField::Month => "month",
            DateTimeField::WeekOfYear => "week_of_year",
            DateTimeField::DayOfWeek => "day_of_week",
            DateTimeField::DayOfMonth => "day_of_month",
            DateTimeField::DayOfYear => "day_of_year",
            DateTimeField::Hour => "hour",
            DateTimeField::Minute => "minute",
            DateTimeField::Second => "second",
            DateTimeField::Millisecond => "millisecond",
        }
    }

    /// Whether the field comes from the time of day rather than the date
    pub fn is_time_field(&self) -> bool {
        matches!(
            self,
            DateTimeField::Hour | DateTimeField::Minute | DateTimeField::Second | DateTimeField::Millisecond
        )
    }
}

impl fmt::Display for DateTimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name that does not match any [`DateTimeField`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date/time field '{0}'")]
pub struct UnknownFieldError(pub String);

impl FromStr for DateTimeField {
    type Err = UnknownFieldError;

    /// Accepts snake_case, camelCase and a few short aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "year" => Ok(DateTimeField::Year),
            "month" | "monthofyear" => Ok(DateTimeField::Month),
            "week" | "weekofyear" | "weekofweekyear" => Ok(DateTimeField::WeekOfYear),
            "dayofweek" | "weekday" => Ok(DateTimeField::DayOfWeek),
            "day" | "dayofmonth" => Ok(DateTimeField::DayOfMonth),
            "dayofyear" | "ordinal" => Ok(DateTimeField::DayOfYear),
            "hour" | "hourofday" => Ok(DateTimeField::Hour),
            "minute" | "minuteofhour" => Ok(DateTimeField::Minute),
            "second" | "secondofminute" => Ok(DateTimeField::Second),
            "millisecond" | "millis" | "millisofsecond" => Ok(DateTimeField::Millisecond),
            _ => Err(UnknownFieldError(s.to_string())),
        }
    }
}
