//! Error types for sysaudit
//!
//! Uses `thiserror` for library errors. Every variant is a configuration
//! failure that aborts the run before any check executes.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::DefinitionError;

/// Result type alias for sysaudit operations
pub type AuditResult<T> = Result<T, AuditError>;

/// Main error type for sysaudit operations
#[derive(Error, Debug)]
pub enum AuditError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Check definition file does not exist
    #[error("check definitions not found: {path}")]
    DefinitionsNotFound { path: PathBuf },

    /// File extension is neither `.json` nor `.toml`
    #[error("unsupported definition format '{extension}' for {file} (expected .json or .toml)")]
    UnsupportedFormat { extension: String, file: PathBuf },

    /// File could not be parsed at all
    #[error("malformed {file}: {message}")]
    Malformed { file: PathBuf, message: String },

    /// Missing required field in a check entry
    #[error("missing required field '{field}' in check #{ordinal} of {file}")]
    MissingField {
        field: String,
        file: PathBuf,
        ordinal: usize,
    },

    /// Field present with an unusable value
    #[error("invalid value for '{field}' in check #{ordinal} of {file}: {message}")]
    InvalidValue {
        field: String,
        file: PathBuf,
        ordinal: usize,
        message: String,
    },

    /// Entry decoded but violates a check or test invariant
    #[error("invalid check #{ordinal} in {file}: {source}")]
    InvalidCheck {
        file: PathBuf,
        ordinal: usize,
        #[source]
        source: DefinitionError,
    },

    /// Settings file could not be parsed
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },
}
