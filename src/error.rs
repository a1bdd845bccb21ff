//! Error types for scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for docs-portal operations
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A directory or file could not be created or probed
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        /// Path being created or checked
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be read or parsed
    #[error("Invalid config {}: {message}", .path.display())]
    Config {
        /// Config file location
        path: PathBuf,
        message: String,
    },
}

impl ScaffoldError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::Filesystem { .. })
    }
}

/// Result type alias for docs-portal operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
