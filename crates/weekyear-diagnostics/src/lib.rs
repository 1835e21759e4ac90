//! weekyear diagnostics and error handling
//!
//! This crate provides the error types raised when calendar values are
//! constructed, the structured error codes shared by every weekyear crate,
//! and a small diagnostic type for reporting failures to users.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;
