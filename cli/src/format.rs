//! Output formatting for violations and the catalog.

use std::path::Path;

use assay_constraint::Violation;
use assay_registry::ConstraintKind;

/// Shown in place of the empty path of class-level violations.
const ROOT_PATH: &str = "(root)";

/// Format a violation as `<file>: <path>: <message> [<code>]`.
pub fn format_violation(file: &Path, violation: &Violation) -> String {
    let path = if violation.property_path.is_empty() {
        ROOT_PATH
    } else {
        violation.property_path.as_str()
    };
    let mut line = format!("{}: {}: {}", file.display(), path, violation.interpolate());
    if let Some(code) = violation.code {
        line.push_str(&format!(" [{}]", code));
    }
    line
}

/// Format the catalog as an aligned table, one kind per line.
pub fn format_kinds() -> Vec<String> {
    let mut lines = vec![format!(
        "{:<22} {:<12} {:<16} {}",
        "KIND", "DEFAULT", "REQUIRED", "TARGET"
    )];
    for kind in ConstraintKind::ALL {
        let required = if kind.required_options().is_empty() {
            "-".to_string()
        } else {
            kind.required_options().join(",")
        };
        lines.push(format!(
            "{:<22} {:<12} {:<16} {}",
            kind.name(),
            kind.default_option().unwrap_or("-"),
            required,
            kind.target()
        ));
    }
    lines
}
