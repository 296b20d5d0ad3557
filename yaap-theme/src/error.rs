//! Theme generation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Errors that can occur while validating, rendering or writing a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Theme name is empty or whitespace only.
    #[error("Name is required.")]
    EmptyName,

    /// Theme name contains characters outside `[A-Za-z0-9-_\s]`.
    #[error("Name must be alphanumeric, dash, space or underscore.")]
    InvalidCharacters(String),

    /// A theme directory with this name already exists.
    #[error("Theme \"{0}\" already exists.")]
    AlreadyExists(String),

    /// Template file is missing from the templates root.
    #[error("template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// The dependency manifest is missing, malformed or lacks a dependency group.
    #[error("cannot read manifest {}: {reason}", path.display())]
    ManifestUnreadable {
        /// Manifest path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// The dependency manifest could not be written back.
    #[error("cannot write manifest {}: {source}", path.display())]
    ManifestWriteError {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error on a specific path.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path being read, written or created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ThemeError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
