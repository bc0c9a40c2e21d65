//! Error types for scaffold operations.

use std::path::Path;
use thiserror::Error;

/// Errors surfaced by scaffold operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A filesystem operation failed
    #[error("Filesystem error: {0}")]
    FsError(String),

    /// A generated manifest was missing or malformed
    #[error("Manifest error: {0}")]
    ManifestError(String),

    /// A toolchain command failed to spawn or exited non-zero
    #[error("Toolchain error: {0}")]
    ToolchainError(String),
}

impl ScaffoldError {
    /// Wrap an I/O error together with the path it occurred on.
    pub fn fs(path: &Path, err: std::io::Error) -> Self {
        ScaffoldError::FsError(format!("{}: {}", path.display(), err))
    }
}

impl From<config::ConfigError> for ScaffoldError {
    fn from(err: config::ConfigError) -> Self {
        ScaffoldError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ScaffoldError {
    fn from(err: serde_json::Error) -> Self {
        ScaffoldError::ManifestError(err.to_string())
    }
}
