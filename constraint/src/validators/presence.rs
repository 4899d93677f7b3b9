//! NotNull, Null, NotBlank, Blank and AssertTrue.
//!
//! These are the only validators that look at `Null` instead of skipping it.

use assay_core::Value;
use assay_registry::{codes, Constraint};

use super::mismatch;
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

/// Blank means null, empty string, false, or an empty list or record.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Record(fields) => fields.is_empty(),
        _ => false,
    }
}

pub struct NotNullValidator;

impl ConstraintValidator for NotNullValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::NotNull { message } = constraint else {
            return Err(mismatch("NotNullValidator", constraint));
        };
        if value.is_null() {
            ctx.report(Violation::new(message, codes::NOT_NULL_ERROR, Value::Null));
        }
        Ok(())
    }
}

pub struct NullValidator;

impl ConstraintValidator for NullValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Null { message } = constraint else {
            return Err(mismatch("NullValidator", constraint));
        };
        if !value.is_null() {
            ctx.report(Violation::new(message, codes::NULL_ERROR, value.clone()));
        }
        Ok(())
    }
}

pub struct NotBlankValidator;

impl ConstraintValidator for NotBlankValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::NotBlank { message } = constraint else {
            return Err(mismatch("NotBlankValidator", constraint));
        };
        if is_blank(value) {
            ctx.report(Violation::new(message, codes::NOT_BLANK_ERROR, value.clone()));
        }
        Ok(())
    }
}

pub struct BlankValidator;

impl ConstraintValidator for BlankValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Blank { message } = constraint else {
            return Err(mismatch("BlankValidator", constraint));
        };
        let blank = match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        if !blank {
            ctx.report(Violation::new(message, codes::BLANK_ERROR, value.clone()));
        }
        Ok(())
    }
}

pub struct AssertTrueValidator;

impl ConstraintValidator for AssertTrueValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::AssertTrue { message } = constraint else {
            return Err(mismatch("AssertTrueValidator", constraint));
        };
        let truthy = match value {
            Value::Null | Value::Bool(true) | Value::Int(1) => true,
            Value::String(s) => s == "1",
            _ => false,
        };
        if !truthy {
            ctx.report(Violation::new(message, codes::ASSERT_TRUE_ERROR, value.clone()));
        }
        Ok(())
    }
}
