//! Process configuration resolved from environment variables.
//!
//! # Responsibility
//! - Locate the library file and the optional log directory.
//! - Keep variable lookup injectable so resolution is testable.
//!
//! # Invariants
//! - Each setting resolves independently; a bad log level never changes the
//!   library path.
//! - The log level is validated only when logging will be started.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const LIBRARY_PATH_ENV: &str = "BOOKSHELF_LIBRARY_PATH";
pub const LOG_LEVEL_ENV: &str = "BOOKSHELF_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "BOOKSHELF_LOG_DIR";
pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

/// Configuration error raised when settings are put to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured log level is not a known level name.
    InvalidLogLevel(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(err) => write!(f, "invalid log level setting: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLogLevel(err) => Some(err),
        }
    }
}

/// Settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub library_path: PathBuf,
    /// Raw level name; `None` means the build default.
    pub log_level: Option<String>,
    /// Logging stays disabled when unset.
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            library_path: non_blank(LIBRARY_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_FILE)),
            log_level: non_blank(LOG_LEVEL_ENV),
            log_dir: non_blank(LOG_DIR_ENV).map(PathBuf::from),
        }
    }

    /// Replaces each setting for which an explicit value is given.
    pub fn with_overrides(
        self,
        library_path: Option<PathBuf>,
        log_level: Option<String>,
        log_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            library_path: library_path.unwrap_or(self.library_path),
            log_level: log_level.or(self.log_level),
            log_dir: log_dir.or(self.log_dir),
        }
    }

    /// Returns `(level, log_dir)` when logging is enabled.
    ///
    /// # Errors
    /// - `InvalidLogLevel` when a log directory is set and the level is unknown.
    pub fn logging_settings(&self) -> Result<Option<(&'static str, &Path)>, ConfigError> {
        let Some(log_dir) = self.log_dir.as_deref() else {
            return Ok(None);
        };
        let level = match self.log_level.as_deref() {
            Some(raw) => normalize_level(raw).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };
        Ok(Some((level, log_dir)))
    }
}
