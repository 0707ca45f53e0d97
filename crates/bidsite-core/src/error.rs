//! Error types for bidsite operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all bidsite crates. Uses `thiserror` for derive macros.
//!
//! Metadata problems inside a single Markdown file are never errors: the
//! extractor always falls back to defaults. Everything here is an I/O,
//! configuration, or serialization failure.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in bidsite operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without a known path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file or directory.
    #[error("I/O error at {}: {source}", path.display())]
    IoPath {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The content directory does not exist.
    #[error("Content directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// Requested item not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an I/O error with the path that caused it.
    pub fn io_with_path(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoPath {
            path: path.as_ref().to_path_buf(),
            source: err,
        }
    }

    /// Create a missing content directory error.
    pub fn missing_directory(path: impl AsRef<Path>) -> Self {
        Self::MissingDirectory(path.as_ref().to_path_buf())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::IoPath { .. })
    }
}

/// Result type alias using bidsite's Error type.
pub type Result<T> = std::result::Result<T, Error>;
