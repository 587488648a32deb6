//! Sandbox error types.

use std::io;
use thiserror::Error;

/// Sandbox error type.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// Path resolves outside every allowed root.
    #[error("Access denied: {0} is outside allowed directories")]
    AccessDenied(String),

    /// A configured root is not an existing directory.
    #[error("{0} is not a directory")]
    NotADirectory(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SandboxError {
    /// Create an AccessDenied error carrying the caller's original input.
    pub fn access_denied(path: impl Into<String>) -> Self {
        Self::AccessDenied(path.into())
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory(path.into())
    }
}

/// Sandbox result type.
pub type SandboxResult<T> = Result<T, SandboxError>;
