//! Min, Max and Range: inclusive numeric bounds.

use assay_core::Value;
use assay_registry::{codes, Bound, Constraint, RangeRule};

use super::mismatch;
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

/// `too_far(n, limit)` is true when `n` lies outside the bound.
fn check_bound(
    value: &Value,
    bound: &Bound,
    too_far: fn(f64, f64) -> bool,
    code: &'static str,
    ctx: &mut ValidationContext<'_>,
) {
    if value.is_null() {
        return;
    }
    let limit = bound.limit.to_string();
    match value.to_number() {
        None => ctx.report(
            Violation::new(&bound.invalid_message, codes::INVALID_NUMBER_ERROR, value.clone())
                .with_param("limit", limit),
        ),
        Some(n) if too_far(n, bound.limit) => ctx.report(
            Violation::new(&bound.message, code, value.clone()).with_param("limit", limit),
        ),
        Some(_) => {}
    }
}

pub struct MinValidator;

impl ConstraintValidator for MinValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Min(bound) = constraint else {
            return Err(mismatch("MinValidator", constraint));
        };
        check_bound(value, bound, |n, limit| n < limit, codes::TOO_LOW_ERROR, ctx);
        Ok(())
    }
}

pub struct MaxValidator;

impl ConstraintValidator for MaxValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Max(bound) = constraint else {
            return Err(mismatch("MaxValidator", constraint));
        };
        check_bound(value, bound, |n, limit| n > limit, codes::TOO_HIGH_ERROR, ctx);
        Ok(())
    }
}

pub struct RangeValidator;

impl RangeValidator {
    fn check(&self, value: &Value, rule: &RangeRule, ctx: &mut ValidationContext<'_>) {
        if value.is_null() {
            return;
        }
        let Some(n) = value.to_number() else {
            ctx.report(Violation::new(
                &rule.invalid_message,
                codes::INVALID_NUMBER_ERROR,
                value.clone(),
            ));
            return;
        };
        let too_low = rule.min.is_some_and(|min| n < min);
        let too_high = rule.max.is_some_and(|max| n > max);
        match (rule.min, rule.max) {
            (Some(min), Some(max)) if too_low || too_high => ctx.report(
                Violation::new(&rule.not_in_range_message, codes::NOT_IN_RANGE_ERROR, value.clone())
                    .with_param("min", min.to_string())
                    .with_param("max", max.to_string()),
            ),
            (Some(min), None) if too_low => ctx.report(
                Violation::new(&rule.min_message, codes::RANGE_TOO_LOW_ERROR, value.clone())
                    .with_param("limit", min.to_string()),
            ),
            (None, Some(max)) if too_high => ctx.report(
                Violation::new(&rule.max_message, codes::RANGE_TOO_HIGH_ERROR, value.clone())
                    .with_param("limit", max.to_string()),
            ),
            _ => {}
        }
    }
}

impl ConstraintValidator for RangeValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Range(rule) = constraint else {
            return Err(mismatch("RangeValidator", constraint));
        };
        self.check(value, rule, ctx);
        Ok(())
    }
}
