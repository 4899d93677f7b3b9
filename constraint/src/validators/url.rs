use assay_core::Value;
use assay_registry::{codes, Constraint};
use url::{Host, Url};

use super::email::is_valid_domain;
use super::{mismatch, string_value};
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

/// `scheme://[userinfo@]host[:port][path][?query][#fragment]` with an allowed scheme.
///
/// Internationalized hosts are checked in their punycode form; a single
/// trailing dot on a domain is accepted.
fn is_valid_url(text: &str, protocols: &[String]) -> bool {
    if text.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    let Some((scheme, _)) = text.split_once("://") else {
        return false;
    };
    let Ok(parsed) = Url::parse(text) else {
        return false;
    };
    if !scheme.eq_ignore_ascii_case(parsed.scheme())
        || !protocols.iter().any(|p| p.eq_ignore_ascii_case(parsed.scheme()))
    {
        return false;
    }
    match parsed.host() {
        Some(Host::Domain(domain)) => {
            is_valid_domain(domain.strip_suffix('.').unwrap_or(domain), 1)
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

pub struct UrlValidator;

impl ConstraintValidator for UrlValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Url(rule) = constraint else {
            return Err(mismatch("UrlValidator", constraint));
        };
        let Some(text) = string_value(value, ctx) else {
            return Ok(());
        };
        if !is_valid_url(&text, &rule.protocols) {
            ctx.report(Violation::new(
                &rule.message,
                codes::URL_INVALID_ERROR,
                value.clone(),
            ));
        }
        Ok(())
    }
}
