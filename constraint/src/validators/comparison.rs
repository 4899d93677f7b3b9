//! Cross-field rules over a composite value: PropertiesInequality and DateOrder.
//!
//! Both read two values by property path and skip the check when either is null.
//! Violations are reported at the path of the first operand.

use std::cmp::Ordering;

use assay_core::Value;
use assay_registry::{codes, Constraint};
use chrono::{DateTime, NaiveDate};

use super::{mismatch, unexpected_type};
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

pub struct PropertiesInequalityValidator;

impl ConstraintValidator for PropertiesInequalityValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::PropertiesInequality(rule) = constraint else {
            return Err(mismatch("PropertiesInequalityValidator", constraint));
        };
        let first = rule.first.resolve(value);
        let second = rule.second.resolve(value);
        if first.is_null() || second.is_null() {
            return Ok(());
        }
        let ordered = match first.compare(second) {
            None => {
                ctx.report_at(&rule.first, unexpected_type(first, second.type_name()));
                return Ok(());
            }
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => !rule.strict,
            Some(Ordering::Greater) => false,
        };
        if !ordered {
            ctx.report_at(
                &rule.first,
                Violation::new(&rule.message, codes::PROPERTIES_INEQUALITY_ERROR, first.clone())
                    .with_param("first", rule.first.to_string())
                    .with_param("second", rule.second.to_string())
                    .with_param("first_value", first.to_param())
                    .with_param("second_value", second.to_param()),
            );
        }
        Ok(())
    }
}

/// Milliseconds since the epoch for a timestamp, an RFC 3339 string or a `YYYY-MM-DD` date.
fn parse_instant(value: &Value) -> Option<i64> {
    match value {
        Value::Timestamp(ms) => Some(*ms),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
                return Some(instant.timestamp_millis());
            }
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
            Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
        }
        _ => None,
    }
}

pub struct DateOrderValidator;

impl ConstraintValidator for DateOrderValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::DateOrder(rule) = constraint else {
            return Err(mismatch("DateOrderValidator", constraint));
        };
        let start = rule.start.resolve(value);
        let end = rule.end.resolve(value);
        if start.is_null() || end.is_null() {
            return Ok(());
        }

        let mut parsed = [None, None];
        for (slot, (path, operand)) in parsed
            .iter_mut()
            .zip([(&rule.start, start), (&rule.end, end)])
        {
            *slot = parse_instant(operand);
            if slot.is_none() {
                ctx.report_at(
                    path,
                    Violation::new(&rule.message, codes::DATE_ORDER_INVALID_DATE_ERROR, operand.clone())
                        .with_param("start", rule.start.to_string())
                        .with_param("end", rule.end.to_string()),
                );
            }
        }
        let [Some(start_ms), Some(end_ms)] = parsed else {
            return Ok(());
        };

        let ordered = start_ms < end_ms || (rule.allow_equal && start_ms == end_ms);
        if !ordered {
            ctx.report_at(
                &rule.start,
                Violation::new(&rule.message, codes::DATE_ORDER_ERROR, start.clone())
                    .with_param("start", rule.start.to_string())
                    .with_param("end", rule.end.to_string())
                    .with_param("start_value", start.to_param())
                    .with_param("end_value", end.to_param()),
            );
        }
        Ok(())
    }
}
