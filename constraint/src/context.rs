//! Per-run validation state.

use assay_core::{PropertyPath, Value};
use assay_registry::{Constraint, ConstraintKind};
use tracing::trace;

use crate::collaborator::{FileProbe, MxResolver};
use crate::dispatch::ValidatorTable;
use crate::error::{ConstraintError, ConstraintResult};
use crate::violation::{Violation, Violations};

/// State threaded through one validation run: the dispatch table, the injected
/// collaborators, the path of the value being checked, and the violations so far.
pub struct ValidationContext<'a> {
    table: &'a ValidatorTable,
    mx_resolver: Option<&'a dyn MxResolver>,
    file_probe: Option<&'a dyn FileProbe>,
    path: PropertyPath,
    violations: Violations,
}

impl<'a> ValidationContext<'a> {
    pub fn new(table: &'a ValidatorTable) -> Self {
        Self {
            table,
            mx_resolver: None,
            file_probe: None,
            path: PropertyPath::root(),
            violations: Violations::new(),
        }
    }

    pub fn with_mx_resolver(mut self, resolver: Option<&'a dyn MxResolver>) -> Self {
        self.mx_resolver = resolver;
        self
    }

    pub fn with_file_probe(mut self, probe: Option<&'a dyn FileProbe>) -> Self {
        self.file_probe = probe;
        self
    }

    /// Start at `path` instead of the root.
    pub fn with_path(mut self, path: PropertyPath) -> Self {
        self.path = path;
        self
    }

    /// Path of the value currently being checked.
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// Record a violation at the current path.
    pub fn report(&mut self, violation: Violation) {
        let path = self.path.to_string();
        self.violations.push(violation.at(path));
    }

    /// Record a violation at `path`, relative to the current path.
    pub fn report_at(&mut self, path: &PropertyPath, violation: Violation) {
        let path = self.path.join(path).to_string();
        self.violations.push(violation.at(path));
    }

    /// Dispatch one constraint against `value` at the current path.
    pub fn validate(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<()> {
        let validator = self.table.get(constraint.kind())?;
        trace!(kind = %constraint.kind(), path = %self.path, "dispatch constraint");
        validator.validate(value, constraint, self)
    }

    /// Dispatch every constraint against `value` at the current path.
    pub fn validate_each(&mut self, value: &Value, constraints: &[Constraint]) -> ConstraintResult<()> {
        for constraint in constraints {
            self.validate(value, constraint)?;
        }
        Ok(())
    }

    /// Dispatch every constraint against `value` at `path`, then restore the current path.
    pub fn validate_at(
        &mut self,
        path: PropertyPath,
        value: &Value,
        constraints: &[Constraint],
    ) -> ConstraintResult<()> {
        let parent = std::mem::replace(&mut self.path, path);
        let result = self.validate_each(value, constraints);
        self.path = parent;
        result
    }

    pub fn mx_resolver(&self, kind: ConstraintKind) -> ConstraintResult<&'a dyn MxResolver> {
        self.mx_resolver
            .ok_or_else(|| ConstraintError::missing_collaborator(kind, "mx resolver"))
    }

    pub fn file_probe(&self, kind: ConstraintKind) -> ConstraintResult<&'a dyn FileProbe> {
        self.file_probe
            .ok_or_else(|| ConstraintError::missing_collaborator(kind, "file probe"))
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn into_violations(self) -> Violations {
        self.violations
    }
}
