//! Week-numbering engine
//!
//! This module provides the `WeekEngine` struct, which evaluates
//! `DateTimeOp`s against calendar values according to its `EngineOptions`.

use crate::operators::fields::{extract_field, year_month};
use crate::operators::week::{iso_week_year, mysql_mode0_week_year, mysql_week_year};
use crate::registry::DateTimeOp;
use serde::{Deserialize, Serialize};
use weekyear_types::{CalendarDate, CalendarDateTime, DateTimeField, WeekYearPair};

/// Which MySQL mode-0 computation to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MysqlWeekCompat {
    /// Legacy arithmetic, year and week concatenated without padding
    #[default]
    Legacy,
    /// Exact `YEARWEEK(date, 0)`, packed as `year * 100 + week`
    Strict,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOptions {
    pub mysql_compat: MysqlWeekCompat,
}

impl EngineOptions {
    pub fn with_mysql_compat(mut self, compat: MysqlWeekCompat) -> Self {
        self.mysql_compat = compat;
        self
    }
}

/// The week-numbering engine
///
/// Holds only its options; every evaluation is a pure function of the input,
/// so one engine can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct WeekEngine {
    options: EngineOptions,
}

impl WeekEngine {
    /// Create an engine with default options (legacy mode 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom options
    pub fn with_options(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// ISO-8601 (week-year, week)
    pub fn iso_week_year(&self, date: CalendarDate) -> WeekYearPair {
        iso_week_year(date)
    }

    /// ISO-8601 `weekyear * 100 + week`
    pub fn iso_year_week(&self, date: CalendarDate) -> i64 {
        iso_week_year(date).packed()
    }

    /// MySQL mode-0 (year, week) under the configured compatibility
    pub fn mysql_week_year(&self, date: CalendarDate) -> WeekYearPair {
        match self.options.mysql_compat {
            MysqlWeekCompat::Legacy => mysql_week_year(date),
            MysqlWeekCompat::Strict => mysql_mode0_week_year(date),
        }
    }

    /// MySQL mode-0 year-week under the configured compatibility
    pub fn mysql_year_week(&self, date: CalendarDate) -> i64 {
        let pair = self.mysql_week_year(date);
        match self.options.mysql_compat {
            MysqlWeekCompat::Legacy => pair.concatenated(),
            MysqlWeekCompat::Strict => pair.packed(),
        }
    }

    /// Extract a single field
    pub fn extract_field(&self, value: &CalendarDateTime, field: DateTimeField) -> i32 {
        extract_field(value, field)
    }

    /// Evaluate an operator
    pub fn evaluate(&self, op: DateTimeOp, value: &CalendarDateTime) -> i64 {
        let field = |field| i64::from(extract_field(value, field));
        match op {
            DateTimeOp::Year => field(DateTimeField::Year),
            DateTimeOp::Month => field(DateTimeField::Month),
            DateTimeOp::Week => field(DateTimeField::WeekOfYear),
            DateTimeOp::DayOfWeek => field(DateTimeField::DayOfWeek),
            DateTimeOp::DayOfMonth => field(DateTimeField::DayOfMonth),
            DateTimeOp::DayOfYear => field(DateTimeField::DayOfYear),
            DateTimeOp::Hour => field(DateTimeField::Hour),
            DateTimeOp::Minute => field(DateTimeField::Minute),
            DateTimeOp::Second => field(DateTimeField::Second),
            DateTimeOp::Millisecond => field(DateTimeField::Millisecond),
            DateTimeOp::YearMonth => year_month(value.date()),
            DateTimeOp::YearWeek => self.iso_year_week(value.date()),
            DateTimeOp::YearWeekMysql => self.mysql_year_week(value.date()),
        }
    }
}
