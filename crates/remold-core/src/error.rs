//! Error types for the Remold core library
//!
//! This module defines the error handling system for Remold, using thiserror
//! for ergonomic error definitions and anyhow for flexible error sources.

use thiserror::Error;

/// Main error type for Remold operations
#[derive(Error, Debug)]
pub enum Error {
    /// A field of the input payload could not be read
    ///
    /// Fatal for the enclosing `transform` call; there is no per-field
    /// recovery. The caller maps this to a user-facing failure.
    #[error("schema access failed for field '{field}': {message}")]
    SchemaAccess {
        field: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// An insertion into the result tree would overwrite an existing entry
    ///
    /// Raised when a scalar would replace an existing leaf or intermediate
    /// node, or when a path traverses through an existing scalar.
    #[error("path conflict at '{path}': {message}")]
    PathConflict { path: String, message: String },

    /// Cooperative cancellation observed while waiting on the benchmark batch
    ///
    /// Re-raised after the worker pool has been shut down, never swallowed.
    #[error("benchmark batch interrupted: {message}")]
    Interrupted { message: String },
}

impl Error {
    /// Create a `SchemaAccess` error without an underlying source
    pub fn schema_access(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::SchemaAccess {
            field: field.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a `SchemaAccess` error wrapping an underlying cause
    pub fn schema_access_with_source(
        field: impl Into<String>,
        message: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        Error::SchemaAccess {
            field: field.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    pub(crate) fn path_conflict(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::PathConflict {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for Remold operations
pub type Result<T> = std::result::Result<T, Error>;
