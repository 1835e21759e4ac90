//! Evaluation errors for the weekyear engine
//!
//! Week numbering itself cannot fail; these cover operator lookup and
//! expression templates.

use crate::registry::DateTimeOp;
use thiserror::Error;
use weekyear_diagnostics::{Diagnostic, ErrorCode, codes};
use weekyear_types::UnknownFieldError;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors raised by operator lookup and template handling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Operator name not recognized
    #[error("Unknown operator: {name}")]
    UnknownOperator { name: String },

    /// Field name not recognized
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    /// No template registered for an operator
    #[error("No template registered for operator {operator}")]
    MissingTemplate { operator: DateTimeOp },

    /// Template text is malformed
    #[error("Invalid template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },

    /// Template rendered with too few arguments
    #[error("Template '{template}' needs {expected} argument(s), got {found}")]
    TemplateArity {
        template: String,
        expected: usize,
        found: usize,
    },
}

impl EvalError {
    /// Create an unknown operator error
    pub fn unknown_operator(name: impl Into<String>) -> Self {
        Self::UnknownOperator { name: name.into() }
    }

    /// Create an invalid template error
    pub fn invalid_template(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnknownOperator { .. } | EvalError::MissingTemplate { .. } => {
                codes::UNKNOWN_OPERATOR
            }
            EvalError::UnknownField(_) => codes::UNKNOWN_FIELD,
            EvalError::InvalidTemplate { .. } => codes::INVALID_TEMPLATE,
            EvalError::TemplateArity { .. } => codes::TEMPLATE_ARITY,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}
