//! Error types for plume-core.
//!
//! The analysis engine is total over its input and has no error surface.
//! Only configuration loading (config files, settings, lexicon word lists)
//! can fail.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A setting holds a value the engine cannot use.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// Dotted path of the offending setting.
        key: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// A lexicon word list file could not be read.
    #[error("failed to read word list {path}: {source}")]
    LexiconFile {
        /// The resolved path that was attempted.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
