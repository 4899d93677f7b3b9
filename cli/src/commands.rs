//! Command handlers.

use std::io::Write;
use std::path::PathBuf;

use assay_constraint::{ConstraintChecker, StdFileProbe, ValidatorTable};
use assay_loader::{load_registry_from_path, read_document};
use assay_registry::Registry;
use tracing::{debug, info};

use crate::args::{CheckArgs, Cli, Commands};
use crate::error::{CliError, CliResult};
use crate::format::{format_kinds, format_violation};

/// Run a parsed command, writing its report to `out`.
///
/// Returns `Ok(false)` when at least one document has violations.
pub fn run(cli: Cli, out: &mut impl Write) -> CliResult<bool> {
    match cli.command {
        Commands::Check(args) => check(&args, out),
        Commands::Kinds => {
            for line in format_kinds() {
                writeln!(out, "{}", line)?;
            }
            Ok(true)
        }
    }
}

fn check(args: &CheckArgs, out: &mut impl Write) -> CliResult<bool> {
    let registry = load_registry_from_path(&args.schema)?;
    check_documents(&registry, &args.class, &args.documents, out)
}

/// Validate each document against `class`, printing one line per violation.
pub fn check_documents(
    registry: &Registry,
    class: &str,
    documents: &[PathBuf],
    out: &mut impl Write,
) -> CliResult<bool> {
    let probe = StdFileProbe;
    let checker = ConstraintChecker::new(ValidatorTable::standard_ref()).with_file_probe(&probe);
    let mut all_valid = true;
    for path in documents {
        let document = read_document(path)?;
        let outcome = checker
            .validate_class(registry, class, &document)
            .map_err(|e| CliError::constraint(path, e))?;
        debug!(document = %path.display(), violations = outcome.len(), "checked document");
        for violation in outcome.violations() {
            writeln!(out, "{}", format_violation(path, violation))?;
        }
        all_valid &= outcome.is_valid();
    }
    info!(documents = documents.len(), valid = all_valid, "check finished");
    Ok(all_valid)
}
