//! Error types for fcompare

use std::path::PathBuf;
use thiserror::Error;

/// Error types for fcompare operations
#[derive(Debug, Error)]
pub enum FcompareError {
    /// File missing, unreadable, or permission-denied at open time
    #[error("cannot open {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid tuning parameters (rejected before any file is read)
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error (logic checks, e.g. reusing a consumed engine)
    #[error("validation error: {0}")]
    Validation(String),

    /// Standard IO error after a file was opened (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FcompareError {
    /// Check if this error is a file-access failure
    pub fn is_file_access_error(&self) -> bool {
        matches!(self, FcompareError::FileAccess { .. })
    }

    /// Check if this error is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, FcompareError::Config(_))
    }
}
