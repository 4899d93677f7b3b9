//! File: existence, readability, size and mime type through a `FileProbe`.

use assay_core::Value;
use assay_registry::{codes, Constraint, ConstraintKind, FileRule};

use super::{mismatch, string_value};
use crate::collaborator::FileStatus;
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

/// `image/png` matches `image/png` and `image/*`.
fn mime_allowed(mime_type: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|pattern| match pattern.strip_suffix("/*") {
        Some(family) => mime_type
            .split_once('/')
            .is_some_and(|(prefix, _)| prefix.eq_ignore_ascii_case(family)),
        None => pattern.eq_ignore_ascii_case(mime_type),
    })
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item))
        .collect::<Vec<_>>()
        .join(", ")
}

/// First failing check, in the order found, readable, size, mime type.
fn check_file(rule: &FileRule, path: &str, status: FileStatus, value: &Value) -> Option<Violation> {
    let file = format!("\"{}\"", path);
    match status {
        FileStatus::NotFound => Some(
            Violation::new(&rule.not_found_message, codes::FILE_NOT_FOUND_ERROR, value.clone())
                .with_param("file", file),
        ),
        FileStatus::NotReadable => Some(
            Violation::new(
                &rule.not_readable_message,
                codes::FILE_NOT_READABLE_ERROR,
                value.clone(),
            )
            .with_param("file", file),
        ),
        FileStatus::Found { size, .. } if rule.max_size.is_some_and(|max| size > max) => {
            let limit = rule.max_size.unwrap_or_default();
            Some(
                Violation::new(&rule.max_size_message, codes::FILE_TOO_LARGE_ERROR, value.clone())
                    .with_param("file", file)
                    .with_param("size", size.to_string())
                    .with_param("limit", limit.to_string())
                    .with_param("suffix", "bytes"),
            )
        }
        FileStatus::Found { mime_type, .. }
            if !rule.mime_types.is_empty() && !mime_allowed(&mime_type, &rule.mime_types) =>
        {
            Some(
                Violation::new(
                    &rule.mime_types_message,
                    codes::FILE_INVALID_MIME_TYPE_ERROR,
                    value.clone(),
                )
                .with_param("file", file)
                .with_param("type", format!("\"{}\"", mime_type))
                .with_param("types", quoted_list(&rule.mime_types)),
            )
        }
        FileStatus::Found { .. } => None,
    }
}

pub struct FileValidator;

impl ConstraintValidator for FileValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::File(rule) = constraint else {
            return Err(mismatch("FileValidator", constraint));
        };
        let probe = ctx.file_probe(ConstraintKind::File)?;
        let Some(path) = string_value(value, ctx) else {
            return Ok(());
        };
        if let Some(violation) = check_file(rule, &path, probe.probe(&path), value) {
            ctx.report(violation);
        }
        Ok(())
    }
}
