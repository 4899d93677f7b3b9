//! RegistryBuilder for constructing an immutable Registry.

use std::collections::HashMap;

use assay_core::{PathError, PropertyPath};
use thiserror::Error;
use tracing::debug;

use crate::{ClassDef, Constraint, ConstraintKind, PropertyDef, Registry, Target};

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur during registry construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("Duplicate class name: {0}")]
    DuplicateClassName(String),

    #[error("Invalid property path '{path}' in class {class}: {source}")]
    InvalidPropertyPath {
        class: String,
        path: String,
        #[source]
        source: PathError,
    },

    #[error("Constraint {kind} applies to class values and cannot be set on property {class}.{path}")]
    ClassConstraintOnProperty {
        class: String,
        path: String,
        kind: ConstraintKind,
    },
}

impl RegistryError {
    pub fn invalid_property_path(
        class: impl Into<String>,
        path: impl Into<String>,
        source: PathError,
    ) -> Self {
        Self::InvalidPropertyPath {
            class: class.into(),
            path: path.into(),
            source,
        }
    }

    pub fn class_constraint_on_property(
        class: impl Into<String>,
        path: impl Into<String>,
        kind: ConstraintKind,
    ) -> Self {
        Self::ClassConstraintOnProperty {
            class: class.into(),
            path: path.into(),
            kind,
        }
    }
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Classes being built, in declaration order.
    classes: Vec<ClassDef>,
    /// Class name to index mapping.
    class_names: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class definition.
    pub fn add_class(&mut self, name: impl Into<String>) -> ClassBuilder<'_> {
        ClassBuilder {
            builder: self,
            name: name.into(),
            constraints: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Check if a class has been declared.
    pub fn has_class(&self, name: &str) -> bool {
        self.class_names.contains_key(name)
    }

    /// Build the immutable registry.
    pub fn build(self) -> RegistryResult<Registry> {
        debug!(
            classes = self.classes.len(),
            constraints = self
                .classes
                .iter()
                .map(ClassDef::constraint_count)
                .sum::<usize>(),
            "registry built"
        );
        Ok(Registry::new(self.classes, self.class_names))
    }
}

/// Builder for a class definition.
pub struct ClassBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    name: String,
    constraints: Vec<Constraint>,
    /// Raw paths paired with their constraints; parsed in `done`.
    properties: Vec<(String, Vec<Constraint>)>,
}

impl<'a> ClassBuilder<'a> {
    /// Add a constraint on a property.
    pub fn property(mut self, path: impl Into<String>, constraint: Constraint) -> Self {
        let path = path.into();
        match self.properties.iter_mut().find(|(p, _)| *p == path) {
            Some((_, constraints)) => constraints.push(constraint),
            None => self.properties.push((path, vec![constraint])),
        }
        self
    }

    /// Add several constraints on a property.
    pub fn properties(
        mut self,
        path: impl Into<String>,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Self {
        let path = path.into();
        for constraint in constraints {
            self = self.property(path.clone(), constraint);
        }
        self
    }

    /// Add a class-level constraint, applied to the whole record.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Finish building this class.
    pub fn done(self) -> RegistryResult<()> {
        // Check for duplicate name
        if self.builder.class_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateClassName(self.name));
        }

        let mut properties = Vec::with_capacity(self.properties.len());
        for (raw, constraints) in self.properties {
            let path = PropertyPath::parse(&raw)
                .map_err(|e| RegistryError::invalid_property_path(&self.name, &raw, e))?;
            if let Some(c) = constraints.iter().find(|c| c.target() == Target::Class) {
                return Err(RegistryError::class_constraint_on_property(
                    &self.name,
                    raw,
                    c.kind(),
                ));
            }
            properties.push(PropertyDef { path, constraints });
        }

        let class_def = ClassDef {
            name: self.name.clone(),
            constraints: self.constraints,
            properties,
        };

        let index = self.builder.classes.len();
        self.builder.class_names.insert(self.name, index);
        self.builder.classes.push(class_def);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_class_with_properties() {
        // GIVEN
        let mut builder = RegistryBuilder::new();

        // WHEN
        builder
            .add_class("User")
            .property("email", Constraint::not_blank())
            .property("email", Constraint::email())
            .property("address.city", Constraint::max_length(40))
            .constraint(Constraint::properties_inequality("minAge", "maxAge").unwrap())
            .done()
            .unwrap();
        let registry = builder.build().unwrap();

        // THEN
        let user = registry.get_class("User").unwrap();
        assert_eq!(user.constraints.len(), 1);
        assert_eq!(user.properties.len(), 2);
        assert_eq!(
            user.get_property("email").unwrap().constraints,
            vec![Constraint::not_blank(), Constraint::email()]
        );
        assert_eq!(user.properties[1].path.to_string(), "address.city");
    }

    #[test]
    fn test_duplicate_class_rejected() {
        // GIVEN
        let mut builder = RegistryBuilder::new();
        builder.add_class("User").done().unwrap();

        // WHEN
        let result = builder.add_class("User").done();

        // THEN
        assert_eq!(result, Err(RegistryError::DuplicateClassName("User".into())));
    }

    #[test]
    fn test_invalid_property_path_rejected() {
        let mut builder = RegistryBuilder::new();
        let result = builder
            .add_class("User")
            .property("items[", Constraint::not_null())
            .done();
        assert!(matches!(
            result,
            Err(RegistryError::InvalidPropertyPath { ref path, .. }) if path == "items["
        ));
        assert!(!builder.has_class("User"));
    }

    #[test]
    fn test_class_constraint_on_property_rejected() {
        let mut builder = RegistryBuilder::new();
        let result = builder
            .add_class("Booking")
            .property("checkIn", Constraint::date_order("checkIn", "checkOut").unwrap())
            .done();
        assert_eq!(
            result,
            Err(RegistryError::class_constraint_on_property(
                "Booking",
                "checkIn",
                ConstraintKind::DateOrder
            ))
        );
    }

    #[test]
    fn test_property_constraint_allowed_at_class_level() {
        let mut builder = RegistryBuilder::new();
        builder
            .add_class("Settings")
            .constraint(Constraint::not_blank())
            .done()
            .unwrap();
        let registry = builder.build().unwrap();
        assert_eq!(registry.get_class("Settings").unwrap().constraints.len(), 1);
    }
}
