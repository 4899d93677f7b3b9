//! MinLength and MaxLength: inclusive length bounds under a charset.

use assay_core::Value;
use assay_registry::{codes, Constraint, Length};

use super::{mismatch, string_value};
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

fn check_length(
    value: &Value,
    rule: &Length,
    too_far: fn(usize, usize) -> bool,
    code: &'static str,
    ctx: &mut ValidationContext<'_>,
) {
    let Some(text) = string_value(value, ctx) else {
        return;
    };
    let length = rule.charset.length(&text);
    if too_far(length, rule.limit) {
        ctx.report(
            Violation::new(&rule.message, code, value.clone())
                .with_param("limit", rule.limit.to_string())
                .with_param("length", length.to_string())
                .with_param("charset", rule.charset.name()),
        );
    }
}

pub struct MinLengthValidator;

impl ConstraintValidator for MinLengthValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::MinLength(rule) = constraint else {
            return Err(mismatch("MinLengthValidator", constraint));
        };
        check_length(value, rule, |len, limit| len < limit, codes::TOO_SHORT_ERROR, ctx);
        Ok(())
    }
}

pub struct MaxLengthValidator;

impl ConstraintValidator for MaxLengthValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::MaxLength(rule) = constraint else {
            return Err(mismatch("MaxLengthValidator", constraint));
        };
        check_length(value, rule, |len, limit| len > limit, codes::TOO_LONG_ERROR, ctx);
        Ok(())
    }
}
