//! Loader error types.

use std::path::PathBuf;

use assay_registry::{CatalogError, RegistryError};
use thiserror::Error;

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while loading declarations or documents.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown constraint kind '{kind}' in {context}")]
    UnknownKind { kind: String, context: String },

    #[error("Invalid declaration in {context}: {message}")]
    InvalidEntry { context: String, message: String },

    #[error("Invalid constraint in {context}: {source}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_kind(kind: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownKind {
            kind: kind.into(),
            context: context.into(),
        }
    }

    pub fn invalid_entry(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn catalog(context: impl Into<String>, source: CatalogError) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }
}
