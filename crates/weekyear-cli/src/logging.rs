//! Log output for the `weekyear` binary
//!
//! Everything logs through the `log` facade: template registration in
//! `weekyear_eval`, config loading and sweep progress here. This module
//! installs the subscriber that prints those records to stderr, so stdout
//! carries only result rows.

use tracing_subscriber::EnvFilter;

/// Log targets of the binary and the crates that log
const TARGETS: [&str; 3] = ["weekyear", "weekyear_eval", "weekyear_types"];

/// Level for `-v` repeated `verbosity` times; warnings are always shown
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives for the weekyear targets only; dependencies stay silent
fn directives(verbosity: u8) -> String {
    let level = level(verbosity);
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber. A set `RUST_LOG` replaces the `-v` mapping.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
