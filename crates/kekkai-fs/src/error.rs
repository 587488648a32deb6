//! Filesystem engine error types.

use std::io;
use thiserror::Error;

/// Length of the anchor-text preview carried by edit failures.
const PREVIEW_CHARS: usize = 50;

/// Filesystem engine error type.
#[derive(Debug, Error)]
pub enum FsError {
    /// An edit's anchor text is absent from the current content.
    #[error("Text to replace not found: {0}...")]
    TextNotFound(String),

    /// An edit's anchor text occurs more than once.
    #[error("Text appears multiple times in file: {0}...")]
    AmbiguousMatch(String),

    /// A read requested both a head and a tail window.
    #[error("Cannot specify both head and tail parameters")]
    HeadAndTail,

    /// A glob pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FsError {
    /// Create a TextNotFound error with a truncated anchor preview.
    pub fn text_not_found(anchor: &str) -> Self {
        Self::TextNotFound(preview(anchor))
    }

    /// Create an AmbiguousMatch error with a truncated anchor preview.
    pub fn ambiguous_match(anchor: &str) -> Self {
        Self::AmbiguousMatch(preview(anchor))
    }

    /// Create an InvalidPattern error.
    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }
}

/// First [`PREVIEW_CHARS`] characters of the anchor, on char boundaries.
fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

/// Filesystem engine result type.
pub type FsResult<T> = Result<T, FsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_anchors() {
        let anchor = "x".repeat(80);
        let err = FsError::text_not_found(&anchor);
        let msg = err.to_string();
        assert!(msg.contains(&"x".repeat(50)));
        assert!(!msg.contains(&"x".repeat(51)));
        assert!(msg.ends_with("..."));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let anchor = "é".repeat(60);
        let err = FsError::ambiguous_match(&anchor);
        assert!(err.to_string().contains(&"é".repeat(50)));
    }
}
