use std::path::PathBuf;

use assay_constraint::ConstraintError;
use assay_loader::LoadError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

/// Errors that stop a command before it can report violations.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{path}: {source}")]
    Constraint {
        path: PathBuf,
        #[source]
        source: ConstraintError,
    },

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn constraint(path: impl Into<PathBuf>, source: ConstraintError) -> Self {
        Self::Constraint {
            path: path.into(),
            source,
        }
    }
}
