//! weekyear value types
//!
//! This crate defines the immutable values the week-numbering engine works on:
//! - `CalendarDate` and `CalendarDateTime`, thin wrappers over `chrono` that
//!   refuse impossible dates at construction time
//! - `WeekYearPair`, a (year, week) result with its two integer encodings
//! - `DateTimeField`, the components a caller can extract from a date-time

pub mod field;
pub mod value;
pub mod week;

pub use field::{DateTimeField, UnknownFieldError};
pub use value::{CalendarDate, CalendarDateTime};
pub use week::WeekYearPair;
