//! Assay Constraint
//!
//! Check values against constraints.
//!
//! Responsibilities:
//! - Dispatch each constraint kind to its validator
//! - Apply constraints to single values and to registered classes
//! - Accumulate every violation instead of stopping at the first
//! - Keep configuration errors apart from validation failures

mod checker;
mod collaborator;
mod context;
mod dispatch;
mod error;
mod outcome;
pub mod validators;
mod violation;

pub use checker::ConstraintChecker;
pub use collaborator::{guess_mime_type, FileProbe, FileStatus, MxResolver, StdFileProbe};
pub use context::ValidationContext;
pub use dispatch::{ConstraintValidator, ValidatorTable};
pub use error::{ConstraintError, ConstraintResult};
pub use outcome::ValidationOutcome;
pub use violation::{Violation, Violations};

use assay_core::Value;
use assay_registry::Constraint;

/// Check a value against one constraint with the standard validator table.
pub fn validate(value: &Value, constraint: &Constraint) -> ConstraintResult<ValidationOutcome> {
    ConstraintChecker::default().validate(value, constraint)
}
