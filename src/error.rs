//! Error handling module for tabprep
//!
//! Provides centralized error handling with proper error types using thiserror.
//! A missing source file is not an error; it is reported through
//! [`BackupOutcome::SourceMissing`](crate::backup::BackupOutcome).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabprep
#[derive(Error, Debug)]
pub enum TabprepError {
    /// IO errors (console output, directory listing)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source exists but copying it to the backup path failed
    #[error("Failed to copy {} to {}: {error}", .path.display(), .destination.display())]
    Copy {
        path: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source path has no file name to derive a backup name from
    #[error("Invalid source path: {0}")]
    InvalidSource(String),
}

/// Result type alias for tabprep operations
pub type Result<T> = std::result::Result<T, TabprepError>;

impl TabprepError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid source path error
    pub fn invalid_source(msg: impl Into<String>) -> Self {
        Self::InvalidSource(msg.into())
    }

    /// Create a copy error for a source/destination pair
    pub fn copy(
        path: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        error: std::io::Error,
    ) -> Self {
        Self::Copy {
            path: path.into(),
            destination: destination.into(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TabprepError::config("source path is empty");
        assert_eq!(err.to_string(), "Configuration error: source path is empty");

        let err = TabprepError::invalid_source("/");
        assert_eq!(err.to_string(), "Invalid source path: /");
    }

    #[test]
    fn test_copy_error_names_both_paths() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = TabprepError::copy("/tmp/page.tsx", "/tmp/page.tsx.backup.x", io_err);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/page.tsx"));
        assert!(msg.contains("/tmp/page.tsx.backup.x"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TabprepError = io_err.into();
        assert!(matches!(err, TabprepError::Io(_)));
    }
}
