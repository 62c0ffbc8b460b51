//! Error types for the Syllabus core library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Syllabus.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The schedule file is missing or unreadable.
    #[error("Cannot read schedule {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schedule file does not decode into an event.
    #[error("Malformed schedule {path}: {source}")]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a source-unavailable error for the given schedule path.
    pub fn source_unavailable(path: &Path, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a malformed-source error for the given schedule path.
    pub fn malformed_source(path: &Path, source: serde_yaml::Error) -> Self {
        Self::MalformedSource {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
