//! Common error types for assay.

use thiserror::Error;

/// Errors raised while parsing a property path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path string was empty.
    #[error("Property path is empty")]
    Empty,

    /// A segment between separators was empty.
    #[error("Empty segment at offset {offset} in property path '{path}'")]
    EmptySegment { path: String, offset: usize },

    /// A `[` without a matching `]`, or a stray `]`.
    #[error("Unbalanced brackets in property path '{path}'")]
    UnbalancedBracket { path: String },

    /// A bracketed segment that is neither an index nor a key.
    #[error("Invalid segment '{segment}' in property path '{path}'")]
    InvalidSegment { path: String, segment: String },
}

impl PathError {
    pub fn empty_segment(path: impl Into<String>, offset: usize) -> Self {
        Self::EmptySegment {
            path: path.into(),
            offset,
        }
    }

    pub fn unbalanced(path: impl Into<String>) -> Self {
        Self::UnbalancedBracket { path: path.into() }
    }

    pub fn invalid_segment(path: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::InvalidSegment {
            path: path.into(),
            segment: segment.into(),
        }
    }
}

/// Result type for path operations.
pub type PathResult<T> = Result<T, PathError>;
