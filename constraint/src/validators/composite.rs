//! Composites that apply nested constraints: All/Each and Required/Optional.

use assay_core::Value;
use assay_registry::Constraint;

use super::{mismatch, unexpected_type};
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;

/// Checks every element of a list (`[i]`) or every value of a record (`[key]`).
/// Serves both `All` and `Each`. Never stops at the first failing element.
pub struct AllValidator;

impl ConstraintValidator for AllValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let nested = match constraint {
            Constraint::All { constraints } | Constraint::Each { constraints } => constraints,
            _ => return Err(mismatch("AllValidator", constraint)),
        };
        match value {
            Value::Null => {}
            Value::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    let path = ctx.path().index(index);
                    ctx.validate_at(path, item, nested)?;
                }
            }
            Value::Record(fields) => {
                for (key, item) in fields {
                    let path = ctx.path().key(key);
                    ctx.validate_at(path, item, nested)?;
                }
            }
            other => ctx.report(unexpected_type(other, "list")),
        }
        Ok(())
    }
}

/// Outside a Collection, `Required` and `Optional` just apply their constraints.
pub struct ExistenceValidator;

impl ConstraintValidator for ExistenceValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        match constraint {
            Constraint::Required { constraints } | Constraint::Optional { constraints } => {
                ctx.validate_each(value, constraints)
            }
            _ => Err(mismatch("ExistenceValidator", constraint)),
        }
    }
}
