//! Constraint checking.

use assay_core::Value;
use assay_registry::{ClassDef, Constraint, Registry};
use tracing::debug;

use crate::collaborator::{FileProbe, MxResolver};
use crate::context::ValidationContext;
use crate::dispatch::ValidatorTable;
use crate::error::{ConstraintError, ConstraintResult};
use crate::outcome::ValidationOutcome;

/// Constraint checker.
///
/// Holds the dispatch table and the injected collaborators; it carries no
/// per-validation state and can be shared across threads.
#[derive(Clone, Copy)]
pub struct ConstraintChecker<'a> {
    table: &'a ValidatorTable,
    mx_resolver: Option<&'a dyn MxResolver>,
    file_probe: Option<&'a dyn FileProbe>,
}

impl<'a> ConstraintChecker<'a> {
    /// Create a new constraint checker over a dispatch table.
    pub fn new(table: &'a ValidatorTable) -> Self {
        Self {
            table,
            mx_resolver: None,
            file_probe: None,
        }
    }

    /// Inject the resolver used by `Email` constraints with `checkMX`.
    pub fn with_mx_resolver(mut self, resolver: &'a dyn MxResolver) -> Self {
        self.mx_resolver = Some(resolver);
        self
    }

    /// Inject the probe used by `File` constraints.
    pub fn with_file_probe(mut self, probe: &'a dyn FileProbe) -> Self {
        self.file_probe = Some(probe);
        self
    }

    fn context(&self) -> ValidationContext<'a> {
        ValidationContext::new(self.table)
            .with_mx_resolver(self.mx_resolver)
            .with_file_probe(self.file_probe)
    }

    /// Check a value against one constraint.
    pub fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
    ) -> ConstraintResult<ValidationOutcome> {
        self.validate_all(value, std::slice::from_ref(constraint))
    }

    /// Check a value against several constraints, collecting every violation.
    pub fn validate_all(
        &self,
        value: &Value,
        constraints: &[Constraint],
    ) -> ConstraintResult<ValidationOutcome> {
        let mut ctx = self.context();
        ctx.validate_each(value, constraints)?;
        Ok(ValidationOutcome::from_violations(ctx.into_violations()))
    }

    /// Check a record against the metadata of a registered class.
    pub fn validate_class(
        &self,
        registry: &Registry,
        class: &str,
        value: &Value,
    ) -> ConstraintResult<ValidationOutcome> {
        let class_def = registry
            .get_class(class)
            .ok_or_else(|| ConstraintError::unknown_class(class))?;
        self.validate_class_def(class_def, value)
    }

    /// Check a record against class metadata: class constraints on the whole
    /// record first, then each property at its path, in declaration order.
    pub fn validate_class_def(
        &self,
        class: &ClassDef,
        value: &Value,
    ) -> ConstraintResult<ValidationOutcome> {
        let mut ctx = self.context();
        ctx.validate_each(value, &class.constraints)?;
        for property in &class.properties {
            ctx.validate_at(
                property.path.clone(),
                property.path.resolve(value),
                &property.constraints,
            )?;
        }
        debug!(
            class = %class.name,
            violations = ctx.violation_count(),
            "validated class"
        );
        Ok(ValidationOutcome::from_violations(ctx.into_violations()))
    }
}

impl Default for ConstraintChecker<'static> {
    fn default() -> Self {
        Self::new(ValidatorTable::standard_ref())
    }
}
