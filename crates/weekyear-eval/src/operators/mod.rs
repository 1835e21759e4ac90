//! Operator implementations
//!
//! Every function here is pure: the result depends only on the arguments.

pub mod fields;
pub mod week;
