//! Configuration errors raised while constructing constraints.

use assay_core::PathError;
use thiserror::Error;

use crate::ConstraintKind;

/// Result type for constraint construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while building a constraint from options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Missing required option '{option}' for constraint {kind}")]
    MissingOption {
        kind: ConstraintKind,
        option: &'static str,
    },

    #[error("Unknown option '{option}' for constraint {kind}")]
    UnknownOption { kind: ConstraintKind, option: String },

    #[error("Invalid option '{option}' for constraint {kind}: expected {expected}")]
    InvalidOption {
        kind: ConstraintKind,
        option: String,
        expected: &'static str,
    },

    #[error("Constraint {kind} has no default option; use named options")]
    NoDefaultOption { kind: ConstraintKind },

    #[error("Constraint {kind} needs at least one of 'min' or 'max'")]
    MissingLimits { kind: ConstraintKind },

    #[error("Constraint {kind} needs at least one nested constraint")]
    EmptyNested { kind: ConstraintKind },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid property path in option '{option}' of constraint {kind}: {source}")]
    InvalidPath {
        kind: ConstraintKind,
        option: &'static str,
        #[source]
        source: PathError,
    },

    #[error("Constraint {nested} applies to class values and cannot be nested in {kind}")]
    TargetMismatch {
        kind: ConstraintKind,
        nested: ConstraintKind,
    },

    #[error("Unknown charset '{charset}'")]
    UnknownCharset { charset: String },

    #[error("Invalid file size '{value}'")]
    InvalidSize { value: String },
}

impl CatalogError {
    pub fn missing_option(kind: ConstraintKind, option: &'static str) -> Self {
        Self::MissingOption { kind, option }
    }

    pub fn unknown_option(kind: ConstraintKind, option: impl Into<String>) -> Self {
        Self::UnknownOption {
            kind,
            option: option.into(),
        }
    }

    pub fn invalid_option(
        kind: ConstraintKind,
        option: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidOption {
            kind,
            option: option.into(),
            expected,
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn invalid_path(kind: ConstraintKind, option: &'static str, source: PathError) -> Self {
        Self::InvalidPath {
            kind,
            option,
            source,
        }
    }

    pub fn target_mismatch(kind: ConstraintKind, nested: ConstraintKind) -> Self {
        Self::TargetMismatch { kind, nested }
    }
}
