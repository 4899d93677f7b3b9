//! Class metadata types.

use assay_core::PropertyPath;

use crate::Constraint;

/// Constraints attached to one property of a class.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDef {
    /// Path of the property within the class record.
    pub path: PropertyPath,
    /// Constraints applied to the value at `path`, in declaration order.
    pub constraints: Vec<Constraint>,
}

impl PropertyDef {
    pub fn new(path: PropertyPath) -> Self {
        Self {
            path,
            constraints: Vec::new(),
        }
    }
}

/// Validation metadata for a named class of records.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    /// Class name.
    pub name: String,
    /// Class-level constraints, applied to the whole record.
    pub constraints: Vec<Constraint>,
    /// Property definitions in declaration order.
    pub properties: Vec<PropertyDef>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Get a property definition by its rendered path.
    pub fn get_property(&self, path: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.path.to_string() == path)
    }

    /// Total number of constraints declared on this class, nested ones excluded.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
            + self
                .properties
                .iter()
                .map(|p| p.constraints.len())
                .sum::<usize>()
    }

    /// Check if the class declares nothing at all.
    pub fn is_empty(&self) -> bool {
        self.constraint_count() == 0
    }
}
