//! Syntactic email check with an optional MX lookup through `MxResolver`.

use assay_core::Value;
use assay_registry::{codes, Constraint, ConstraintKind};

use super::{mismatch, string_value};
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

const ATOM_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || ATOM_SPECIALS.contains(c))
}

/// At least `min_labels` labels of letters, digits and hyphens, no label starting or ending with a hyphen.
pub(crate) fn is_valid_domain(domain: &str, min_labels: usize) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= min_labels
        && labels.iter().all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// Split a syntactically valid address into its domain.
fn email_domain(address: &str) -> Option<&str> {
    let (local, domain) = address.split_once('@')?;
    if domain.contains('@') || !is_valid_local_part(local) || !is_valid_domain(domain, 2) {
        return None;
    }
    Some(domain)
}

pub struct EmailValidator;

impl ConstraintValidator for EmailValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Email(rule) = constraint else {
            return Err(mismatch("EmailValidator", constraint));
        };
        // A missing resolver is a configuration error even for values that are skipped.
        let resolver = if rule.check_mx {
            Some(ctx.mx_resolver(ConstraintKind::Email)?)
        } else {
            None
        };
        let Some(text) = string_value(value, ctx) else {
            return Ok(());
        };
        match email_domain(&text) {
            None => ctx.report(Violation::new(
                &rule.message,
                codes::EMAIL_INVALID_FORMAT_ERROR,
                value.clone(),
            )),
            Some(domain) => {
                if let Some(resolver) = resolver {
                    if !resolver.has_mx_record(domain) {
                        ctx.report(Violation::new(
                            &rule.message,
                            codes::EMAIL_MX_CHECK_FAILED_ERROR,
                            value.clone(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}
