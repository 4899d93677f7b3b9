//! The Registry - immutable class metadata lookup.

use std::collections::HashMap;

use crate::ClassDef;

/// The Registry provides lookup of class validation metadata.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Class definitions in declaration order.
    classes: Vec<ClassDef>,
    /// Class index lookup by name.
    class_names: HashMap<String, usize>,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(classes: Vec<ClassDef>, class_names: HashMap<String, usize>) -> Self {
        Self {
            classes,
            class_names,
        }
    }

    /// Get a class definition by name.
    pub fn get_class(&self, name: &str) -> Option<&ClassDef> {
        self.class_names.get(name).map(|&i| &self.classes[i])
    }

    /// Check if a class exists.
    pub fn has_class(&self, name: &str) -> bool {
        self.class_names.contains_key(name)
    }

    /// Get all class definitions, in declaration order.
    pub fn all_classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.classes.iter()
    }

    /// Get all class names, in declaration order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.name.as_str())
    }

    /// Get the number of classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Get the number of constraints across every class.
    pub fn constraint_count(&self) -> usize {
        self.classes.iter().map(ClassDef::constraint_count).sum()
    }
}
