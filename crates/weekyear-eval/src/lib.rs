//! weekyear evaluation engine
//!
//! This crate computes week numbers for calendar dates under two conventions
//! that disagree near year boundaries:
//!
//! - **ISO-8601**: weeks start on Monday, week 1 holds the year's first
//!   Thursday. Taken from `chrono`.
//! - **MySQL mode 0**: weeks start on Sunday. Computed here, either with the
//!   legacy arithmetic existing consumers depend on or with the exact
//!   `YEARWEEK(date, 0)` rule.
//!
//! # Example
//!
//! ```
//! use weekyear_eval::{WeekEngine, mysql_year_week, iso_year_week};
//! use weekyear_types::CalendarDate;
//!
//! let date = CalendarDate::new(2015, 6, 15).unwrap();
//! assert_eq!(iso_year_week(date), 201525);
//! assert_eq!(mysql_year_week(date), 201524);
//!
//! let engine = WeekEngine::new();
//! assert_eq!(engine.mysql_year_week(date), 201524);
//! ```
//!
//! # Architecture
//!
//! - `operators`: the pure week-numbering and field-extraction functions
//! - `WeekEngine`: dispatches `DateTimeOp`s to the operators according to
//!   its `EngineOptions`
//! - `TemplateRegistry`: maps each `DateTimeOp` to an expression template for
//!   code that renders operators as text instead of evaluating them

pub mod engine;
pub mod error;
pub mod operators;
pub mod registry;

// Re-export main types
pub use engine::{EngineOptions, MysqlWeekCompat, WeekEngine};
pub use error::{EvalError, EvalResult};
pub use registry::{DateTimeOp, Template, TemplateRegistry};

// Re-export the operator functions
pub use operators::fields::{extract_field, year_month};
pub use operators::week::{
    has_sunday_in_last_week, iso_week_year, iso_year_week, mysql_mode0_week_year,
    mysql_mode0_year_week, mysql_week_year, mysql_year_week,
};
