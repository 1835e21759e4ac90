//! weekyear error types

use crate::{ErrorCode, codes};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the operation cannot proceed
    Error,
    /// Warning - potential issue but can continue
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message reported to users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    ///
    /// The help text defaults to the one registered for `code`.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            help: code.info().help.map(str::to_string),
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(code, message)
        }
    }

    /// Render for a terminal, with the severity and code highlighted
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let head = match self.severity {
            Severity::Error => format!("{}[{}]", self.severity, self.code).red().bold(),
            Severity::Warning => format!("{}[{}]", self.severity, self.code).yellow().bold(),
        };
        let mut out = format!("{}: {}", head, self.message);
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".cyan().bold(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)
    }
}

/// A year/month/day triple that does not name a proleptic Gregorian date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
pub struct InvalidDateError {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl InvalidDateError {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// A time-of-day component outside its range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid time of day {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
pub struct InvalidTimeError {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

/// Text that could not be read as a date or date-time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse '{input}' as a date: {reason}")]
pub struct DateParseError {
    pub input: String,
    pub reason: String,
}

impl DateParseError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while constructing calendar values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    #[error(transparent)]
    InvalidTime(#[from] InvalidTimeError),

    #[error(transparent)]
    Parse(#[from] DateParseError),
}

impl DateError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DateError::InvalidDate(_) => codes::INVALID_DATE,
            DateError::InvalidTime(_) => codes::INVALID_TIME,
            DateError::Parse(_) => codes::INVALID_FORMAT,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}
