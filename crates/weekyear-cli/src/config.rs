//! Engine configuration loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use weekyear_diagnostics::{Diagnostic, ErrorCode, codes};
use weekyear_eval::{EngineOptions, MysqlWeekCompat};

/// A config file that could not be read or is not valid engine options
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::Read { .. } => codes::IO_ERROR,
            ConfigError::Parse { .. } => codes::CONFIGURATION_ERROR,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}

/// Build engine options from an optional JSON file, then apply CLI flags
///
/// ```json
/// { "mysql_compat": "strict" }
/// ```
///
/// `--strict-mysql` wins over whatever the file says.
pub fn load(path: Option<&Path>, strict_mysql: bool) -> Result<EngineOptions, ConfigError> {
    let mut options = match path {
        Some(path) => read(path)?,
        None => EngineOptions::default(),
    };

    if strict_mysql {
        options = options.with_mysql_compat(MysqlWeekCompat::Strict);
    }

    log::debug!("engine options: {options:?}");
    Ok(options)
}

fn read(path: &Path) -> Result<EngineOptions, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let options = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded engine options from {}", path.display());
    Ok(options)
}
