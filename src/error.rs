//! Error types for nmapviz.
//!
//! Uses `thiserror` for ergonomic error definitions. The parser itself has
//! no error type: unrecognized input is skipped, not reported.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings file: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from selecting a record to inspect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    #[error("no host '{0}' in the report")]
    HostNotFound(String),

    #[error("host '{ip}' has no port {port}")]
    PortNotFound { ip: String, port: String },
}

/// Top-level error for command execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Inspect(#[from] InspectError),

    #[error("failed to read input {source_name}: {reason}")]
    Input { source_name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for command execution.
pub type CliResult<T> = Result<T, CliError>;
