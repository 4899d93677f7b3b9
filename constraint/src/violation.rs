//! Constraint violation types.

use std::collections::BTreeMap;

use assay_core::Value;

/// A failed check: a message template plus the parameters that fill it.
///
/// The template is left unrendered; translating and formatting it is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Message template with `{{ placeholder }}` markers.
    pub message_template: String,
    /// Interpolation parameters keyed by placeholder name.
    pub params: BTreeMap<String, String>,
    /// Stable error code identifying the failure reason.
    pub code: Option<&'static str>,
    /// Rendered path of the offending value; empty for the root.
    pub property_path: String,
    /// The offending value.
    pub invalid_value: Value,
}

impl Violation {
    /// Create a new violation. The `value` parameter is filled from `invalid_value`.
    pub fn new(
        message_template: impl Into<String>,
        code: &'static str,
        invalid_value: Value,
    ) -> Self {
        let mut params = BTreeMap::new();
        params.insert("value".to_string(), invalid_value.to_param());
        Self {
            message_template: message_template.into(),
            params,
            code: Some(code),
            property_path: String::new(),
            invalid_value,
        }
    }

    /// Add an interpolation parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the property path.
    pub fn at(mut self, property_path: impl Into<String>) -> Self {
        self.property_path = property_path.into();
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|s| s.as_str())
    }

    /// Substitute `{{ key }}` markers with their parameters.
    ///
    /// Plain substitution only, meant for tooling output. Unknown markers are kept.
    pub fn interpolate(&self) -> String {
        let mut out = String::with_capacity(self.message_template.len());
        let mut rest = self.message_template.as_str();
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let Some(len) = rest[start..].find("}}") else {
                rest = &rest[start..];
                break;
            };
            let marker = &rest[start..start + len + 2];
            match self.params.get(marker[2..marker.len() - 2].trim()) {
                Some(value) => out.push_str(value),
                None => out.push_str(marker),
            }
            rest = &rest[start + len + 2..];
        }
        out.push_str(rest);
        out
    }
}

/// Collection of violations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get all violations.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Get violations reported at a property path.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.property_path == path)
    }

    /// Get the error codes, in report order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.violations.iter().filter_map(|v| v.code).collect()
    }

    /// Merge another violations collection.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
