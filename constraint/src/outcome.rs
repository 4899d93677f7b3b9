//! Validation outcomes.

use crate::violation::{Violation, Violations};

/// Result of validating a value: valid, or every violation found.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid,
    /// Never empty.
    Invalid(Violations),
}

impl ValidationOutcome {
    pub fn from_violations(violations: Violations) -> Self {
        if violations.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Violations found; empty when valid.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationOutcome::Valid => &[],
            ValidationOutcome::Invalid(violations) => violations.all(),
        }
    }

    pub fn into_violations(self) -> Violations {
        match self {
            ValidationOutcome::Valid => Violations::new(),
            ValidationOutcome::Invalid(violations) => violations,
        }
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations().len()
    }

    /// Combine two outcomes, keeping the violations of both.
    pub fn merge(self, other: ValidationOutcome) -> Self {
        let mut violations = self.into_violations();
        violations.merge(other.into_violations());
        Self::from_violations(violations)
    }
}

impl From<Violations> for ValidationOutcome {
    fn from(violations: Violations) -> Self {
        Self::from_violations(violations)
    }
}
