use assay_core::Value;
use assay_registry::{codes, Constraint};

use super::{mismatch, string_value};
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

/// Unanchored pattern search; `match=false` inverts the outcome.
pub struct RegexValidator;

impl ConstraintValidator for RegexValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Regex(rule) = constraint else {
            return Err(mismatch("RegexValidator", constraint));
        };
        let Some(text) = string_value(value, ctx) else {
            return Ok(());
        };
        if rule.pattern.is_match(&text) != rule.matches {
            ctx.report(
                Violation::new(&rule.message, codes::REGEX_FAILED_ERROR, value.clone())
                    .with_param("pattern", rule.pattern.as_str()),
            );
        }
        Ok(())
    }
}
