//! Constraint error types.

use assay_registry::ConstraintKind;
use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Configuration errors that can occur during constraint checking.
///
/// A value failing a constraint is never an error; it is reported as a violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    #[error("Unknown constraint: no validator registered for {kind}")]
    UnknownConstraint { kind: ConstraintKind },

    #[error("Unknown class: {name}")]
    UnknownClass { name: String },

    #[error("Constraint {kind} requires a {collaborator} but none was provided")]
    MissingCollaborator {
        kind: ConstraintKind,
        collaborator: &'static str,
    },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl ConstraintError {
    pub fn unknown_constraint(kind: ConstraintKind) -> Self {
        Self::UnknownConstraint { kind }
    }

    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::UnknownClass { name: name.into() }
    }

    pub fn missing_collaborator(kind: ConstraintKind, collaborator: &'static str) -> Self {
        Self::MissingCollaborator { kind, collaborator }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}
