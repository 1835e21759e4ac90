//! weekyear error codes following a structured numbering system
//!
//! Error code ranges:
//! - WY0001-WY0099: Date and time construction errors
//! - WY0100-WY0199: Template registry errors
//! - WY0200-WY0299: System errors (configuration file I/O and contents)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WY{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Date and time construction errors (0001-0099)
    map.insert(1, ErrorInfo::new("Invalid calendar date")
        .with_help("Check that the day exists in the given month and year"));
    map.insert(2, ErrorInfo::new("Invalid time of day")
        .with_help("Hours are 0-23, minutes and seconds 0-59, milliseconds 0-999"));
    map.insert(3, ErrorInfo::new("Invalid date/time format")
        .with_help("Use YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS[.fff]]; put `--` before negative years"));
    map.insert(4, ErrorInfo::new("Empty date range")
        .with_help("The last day of a range must not be before the first"));

    // Template registry errors (0100-0199)
    map.insert(100, ErrorInfo::new("Unknown operator"));
    map.insert(101, ErrorInfo::new("Unknown date/time field"));
    map.insert(102, ErrorInfo::new("Invalid expression template"));
    map.insert(103, ErrorInfo::new("Template argument count mismatch"));

    // System errors (0200-0299)
    map.insert(200, ErrorInfo::new("I/O error")
        .with_help("Check that the file exists and is readable"));
    map.insert(201, ErrorInfo::new("Configuration error")
        .with_help(r#"Engine options are a JSON object such as {"mysql_compat": "strict"}"#));

    map
});

/// Common error codes as constants
pub mod codes {
    use super::ErrorCode;

    // Date and time construction errors
    pub const INVALID_DATE: ErrorCode = ErrorCode::new(1);
    pub const INVALID_TIME: ErrorCode = ErrorCode::new(2);
    pub const INVALID_FORMAT: ErrorCode = ErrorCode::new(3);
    pub const EMPTY_RANGE: ErrorCode = ErrorCode::new(4);

    // Template registry errors
    pub const UNKNOWN_OPERATOR: ErrorCode = ErrorCode::new(100);
    pub const UNKNOWN_FIELD: ErrorCode = ErrorCode::new(101);
    pub const INVALID_TEMPLATE: ErrorCode = ErrorCode::new(102);
    pub const TEMPLATE_ARITY: ErrorCode = ErrorCode::new(103);

    // System errors
    pub const IO_ERROR: ErrorCode = ErrorCode::new(200);
    pub const CONFIGURATION_ERROR: ErrorCode = ErrorCode::new(201);
}
