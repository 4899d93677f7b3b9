//! Error types for the scenario framework.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Failed to load a schema or cases fixture.
    #[error("failed to load fixture '{path}': {source}")]
    Fixture {
        path: PathBuf,
        source: assay_loader::LoadError,
    },

    /// The cases fixture is not a mapping of case name to document.
    #[error("cases fixture '{path}' must map case names to documents")]
    InvalidCases { path: PathBuf },

    /// Assertion failed.
    #[error("assertion failed for case '{case}': {message}")]
    AssertionFailed { case: String, message: String },

    /// Case not found in the cases fixture.
    #[error("case '{case}' not found in cases fixture")]
    CaseNotFound { case: String },

    /// Missing schema.
    #[error("schema not specified for scenario '{scenario}'")]
    MissingSchema { scenario: String },

    /// Missing cases fixture.
    #[error("cases not specified for scenario '{scenario}'")]
    MissingCases { scenario: String },

    /// Missing class.
    #[error("class not specified for scenario '{scenario}'")]
    MissingClass { scenario: String },
}

impl ScenarioError {
    pub fn fixture(path: impl Into<PathBuf>, source: assay_loader::LoadError) -> Self {
        Self::Fixture {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_cases(path: impl Into<PathBuf>) -> Self {
        Self::InvalidCases { path: path.into() }
    }

    pub fn assertion_failed(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            case: case.into(),
            message: message.into(),
        }
    }

    pub fn case_not_found(case: impl Into<String>) -> Self {
        Self::CaseNotFound { case: case.into() }
    }

    pub fn missing_schema(scenario: impl Into<String>) -> Self {
        Self::MissingSchema {
            scenario: scenario.into(),
        }
    }

    pub fn missing_cases(scenario: impl Into<String>) -> Self {
        Self::MissingCases {
            scenario: scenario.into(),
        }
    }

    pub fn missing_class(scenario: impl Into<String>) -> Self {
        Self::MissingClass {
            scenario: scenario.into(),
        }
    }
}
