//! Collection: structural check over a record's key set.
//!
//! Declared fields are visited in declaration order. A present field has its
//! constraints checked at `[field]`; an absent one is reported missing unless it
//! is optional or missing fields are allowed. Undeclared keys are reported
//! afterwards, in key order.

use assay_core::{PropertyPath, Record, Value};
use assay_registry::{codes, CollectionRule, Constraint, Existence};

use super::{mismatch, unexpected_type};
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

fn field_violation(template: &str, code: &'static str, field: &str, value: Value) -> Violation {
    let quoted = format!("\"{}\"", field);
    Violation::new(template, code, value)
        .with_param("field", quoted.clone())
        .with_param("fields", quoted)
}

pub struct CollectionValidator;

impl CollectionValidator {
    fn check_record(
        &self,
        rule: &CollectionRule,
        record: &Record,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        for field in &rule.fields {
            let path = ctx.path().key(&field.name);
            match record.get(&field.name) {
                Some(value) => ctx.validate_at(path, value, &field.constraints)?,
                None if field.existence == Existence::Optional || rule.allow_missing_fields => {}
                None => ctx.report_at(
                    &PropertyPath::root().key(&field.name),
                    field_violation(
                        &rule.missing_fields_message,
                        codes::MISSING_FIELD_ERROR,
                        &field.name,
                        Value::Null,
                    ),
                ),
            }
        }

        if !rule.allow_extra_fields {
            for (key, value) in record {
                if rule.field(key).is_none() {
                    ctx.report_at(
                        &PropertyPath::root().key(key),
                        field_violation(
                            &rule.extra_fields_message,
                            codes::NO_SUCH_FIELD_ERROR,
                            key,
                            value.clone(),
                        ),
                    );
                }
            }
        }
        Ok(())
    }
}

impl ConstraintValidator for CollectionValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Collection(rule) = constraint else {
            return Err(mismatch("CollectionValidator", constraint));
        };
        match value {
            Value::Null => Ok(()),
            Value::Record(record) => self.check_record(rule, record, ctx),
            other => {
                ctx.report(unexpected_type(other, "record"));
                Ok(())
            }
        }
    }
}
