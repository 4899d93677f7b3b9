//! Assertion types and builders for verifying case outcomes.

use assay_constraint::{ValidationOutcome, Violation};

use crate::error::{ScenarioError, ScenarioResult};

/// A complete assertion for one case.
#[derive(Debug, Default)]
pub struct Assertion {
    pub valid: bool,
    pub violations: Option<usize>,

    // Each expectation needs at least one matching violation
    pub at: Vec<String>,
    pub codes: Vec<&'static str>,
    pub at_code: Vec<(String, &'static str)>,
    pub params: Vec<(String, String)>,
    pub messages: Vec<String>,

    // Error assertions
    pub error: Option<String>,
    pub error_pattern: Option<String>,
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a case outcome.
    pub fn verify(&self, case: &str, result: &Result<ValidationOutcome, String>) -> ScenarioResult<()> {
        if let Some(ref expected_error) = self.error {
            return match result {
                Err(msg) if msg.contains(expected_error) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    case,
                    format!("expected error containing '{}', got: {}", expected_error, msg),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    case,
                    format!("expected error containing '{}', but validation ran", expected_error),
                )),
            };
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(case, format!("invalid regex pattern: {}", e))
            })?;
            return match result {
                Err(msg) if re.is_match(msg) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    case,
                    format!("expected error matching '{}', got: {}", pattern, msg),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    case,
                    format!("expected error matching '{}', but validation ran", pattern),
                )),
            };
        }

        let outcome = result
            .as_ref()
            .map_err(|msg| ScenarioError::assertion_failed(case, format!("validation failed: {}", msg)))?;
        let violations = outcome.violations();

        if self.valid && !outcome.is_valid() {
            return Err(ScenarioError::assertion_failed(
                case,
                format!("expected valid, got: {}", describe(violations)),
            ));
        }

        if let Some(expected) = self.violations {
            if violations.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    case,
                    format!(
                        "expected {} violations, got {}: {}",
                        expected,
                        violations.len(),
                        describe(violations)
                    ),
                ));
            }
        }

        for path in &self.at {
            if !violations.iter().any(|v| &v.property_path == path) {
                return Err(ScenarioError::assertion_failed(
                    case,
                    format!("expected a violation at '{}', got: {}", path, describe(violations)),
                ));
            }
        }

        for code in &self.codes {
            if !violations.iter().any(|v| v.code == Some(*code)) {
                return Err(ScenarioError::assertion_failed(
                    case,
                    format!("expected code '{}', got: {}", code, describe(violations)),
                ));
            }
        }

        for (path, code) in &self.at_code {
            if !violations
                .iter()
                .any(|v| &v.property_path == path && v.code == Some(*code))
            {
                return Err(ScenarioError::assertion_failed(
                    case,
                    format!(
                        "expected code '{}' at '{}', got: {}",
                        code,
                        path,
                        describe(violations)
                    ),
                ));
            }
        }

        for (key, value) in &self.params {
            if !violations.iter().any(|v| v.param(key) == Some(value.as_str())) {
                return Err(ScenarioError::assertion_failed(
                    case,
                    format!("expected param {}={}, got: {}", key, value, describe(violations)),
                ));
            }
        }

        for message in &self.messages {
            if !violations.iter().any(|v| v.interpolate().contains(message.as_str())) {
                return Err(ScenarioError::assertion_failed(
                    case,
                    format!("expected message containing '{}', got: {}", message, describe(violations)),
                ));
            }
        }

        Ok(())
    }
}

fn describe(violations: &[Violation]) -> String {
    if violations.is_empty() {
        return "no violations".to_string();
    }
    violations
        .iter()
        .map(|v| format!("{} [{}] {}", v.property_path, v.code.unwrap_or("-"), v.interpolate()))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builder for creating assertions with a fluent API.
#[derive(Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    // ========== Outcome assertions ==========

    /// Assert that the document is valid.
    pub fn valid(mut self) -> Self {
        self.assertion.valid = true;
        self.assertion.violations = Some(0);
        self
    }

    /// Assert exactly N violations.
    pub fn violations(mut self, n: usize) -> Self {
        self.assertion.violations = Some(n);
        self
    }

    /// Assert a violation at the given property path.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.assertion.at.push(path.into());
        self
    }

    /// Assert a violation with the given code.
    pub fn code(mut self, code: &'static str) -> Self {
        self.assertion.codes.push(code);
        self
    }

    /// Assert a violation with the given code at the given path.
    pub fn at_code(mut self, path: impl Into<String>, code: &'static str) -> Self {
        self.assertion.at_code.push((path.into(), code));
        self
    }

    /// Assert a violation carrying the given interpolation parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.assertion.params.push((key.into(), value.into()));
        self
    }

    /// Assert a violation whose rendered message contains `text`.
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.assertion.messages.push(text.into());
        self
    }

    // ========== Error assertions ==========

    /// Assert that validation fails with a configuration error containing `text`.
    pub fn error(mut self, text: impl Into<String>) -> Self {
        self.assertion.error = Some(text.into());
        self
    }

    /// Assert that validation fails with a configuration error matching `pattern`.
    pub fn error_matching(mut self, pattern: impl Into<String>) -> Self {
        self.assertion.error_pattern = Some(pattern.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_constraint::Violations;
    use assay_core::Value;
    use assay_registry::codes;

    fn invalid_at(path: &str, code: &'static str) -> Result<ValidationOutcome, String> {
        let mut violations = Violations::new();
        violations.push(
            Violation::new("This value should be {{ limit }} or more", code, Value::Int(3))
                .with_param("limit", "18")
                .at(path),
        );
        Ok(ValidationOutcome::from_violations(violations))
    }

    #[test]
    fn test_valid_assertion() {
        let assertion = AssertionBuilder::new().valid().build();
        let valid = Ok(ValidationOutcome::from_violations(Violations::new()));
        assert!(assertion.verify("case", &valid).is_ok());
        assert!(assertion
            .verify("case", &invalid_at("age", codes::TOO_LOW_ERROR))
            .is_err());
    }

    #[test]
    fn test_violation_assertions() {
        let result = invalid_at("age", codes::TOO_LOW_ERROR);
        let passing = AssertionBuilder::new()
            .violations(1)
            .at("age")
            .code(codes::TOO_LOW_ERROR)
            .at_code("age", codes::TOO_LOW_ERROR)
            .param("limit", "18")
            .message("should be 18 or more")
            .build();
        assert!(passing.verify("case", &result).is_ok());

        let wrong_path = AssertionBuilder::new().at("email").build();
        assert!(wrong_path.verify("case", &result).is_err());

        let wrong_code = AssertionBuilder::new().at_code("age", codes::TOO_HIGH_ERROR).build();
        assert!(wrong_code.verify("case", &result).is_err());
    }

    #[test]
    fn test_error_assertions() {
        let error: Result<ValidationOutcome, String> =
            Err("Constraint Email requires a mx resolver but none was provided".to_string());
        assert!(AssertionBuilder::new()
            .error("mx resolver")
            .build()
            .verify("case", &error)
            .is_ok());
        assert!(AssertionBuilder::new()
            .error_matching("^Constraint \\w+ requires")
            .build()
            .verify("case", &error)
            .is_ok());
        assert!(AssertionBuilder::new()
            .valid()
            .build()
            .verify("case", &error)
            .is_err());
    }
}
