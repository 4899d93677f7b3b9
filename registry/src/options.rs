//! Named option bags used for declarative constraint construction.

use std::collections::BTreeMap;

use assay_core::Value;

use crate::Constraint;

/// A single option value.
#[derive(Debug, Clone)]
pub enum OptionValue {
    /// A plain value (limit, pattern, flag, message, list of names, ...).
    Value(Value),
    /// A nested list of constraints (`All`, `Each`, `Required`, `Optional`).
    Constraints(Vec<Constraint>),
    /// Collection fields in declaration order, each with its constraints.
    Fields(Vec<(String, Vec<Constraint>)>),
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        OptionValue::Value(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Value(Value::from(value))
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Value(Value::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Value(Value::Int(value))
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Value(Value::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Value(Value::Float(value))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Value(Value::Bool(value))
    }
}

impl From<Vec<Constraint>> for OptionValue {
    fn from(constraints: Vec<Constraint>) -> Self {
        OptionValue::Constraints(constraints)
    }
}

/// Named options for one constraint declaration.
#[derive(Debug, Clone, Default)]
pub struct Options {
    entries: BTreeMap<String, OptionValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert an option, returning the previous value if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> BTreeMap<String, OptionValue> {
        self.entries
    }
}
