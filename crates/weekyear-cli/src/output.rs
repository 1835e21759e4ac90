//! Output formatting utilities

use crate::config::ConfigError;
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::IsTerminal;
use tabled::{Table, Tabled, settings::Style};
use weekyear_diagnostics::{DateError, Diagnostic, ErrorCode};
use weekyear_eval::EvalError;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
    Table,
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stdout().is_terminal()),
    }
}

/// Render rows in the requested format
pub fn render_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(rows)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(rows)?,
        OutputFormat::Table => Table::new(rows).with(Style::rounded()).to_string(),
    })
}

/// Print rows to stdout
pub fn print_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> Result<()> {
    println!("{}", render_rows(rows, format)?);
    Ok(())
}

/// Format an error for display
///
/// Date, template and config errors carry an error code and help text.
pub fn format_error(error: &anyhow::Error) -> String {
    let diagnostic = error
        .downcast_ref::<DateError>()
        .map(DateError::to_diagnostic)
        .or_else(|| error.downcast_ref::<EvalError>().map(EvalError::to_diagnostic))
        .or_else(|| error.downcast_ref::<ConfigError>().map(ConfigError::to_diagnostic));

    match diagnostic {
        Some(diagnostic) => Diagnostic {
            message: format!("{error:#}"),
            ..diagnostic
        }
        .render_colored(),
        None => format!("{} {:#}", "Error:".red().bold(), error),
    }
}

/// Format a warning for display
pub fn format_warning(code: ErrorCode, warning: &str) -> String {
    Diagnostic::warning(code, warning).render_colored()
}
