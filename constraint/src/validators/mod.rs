//! Validators for every catalog kind.

mod collection;
mod comparison;
mod composite;
mod email;
mod file;
mod format;
mod iban;
mod length;
mod presence;
mod range;
mod regex;
mod url;

pub use collection::CollectionValidator;
pub use comparison::{DateOrderValidator, PropertiesInequalityValidator};
pub use composite::{AllValidator, ExistenceValidator};
pub use email::EmailValidator;
pub use file::FileValidator;
pub use format::{DigitValidator, LuhnValidator, NifValidator};
pub use iban::IbanValidator;
pub use length::{MaxLengthValidator, MinLengthValidator};
pub use presence::{
    AssertTrueValidator, BlankValidator, NotBlankValidator, NotNullValidator, NullValidator,
};
pub use range::{MaxValidator, MinValidator, RangeValidator};
pub use regex::RegexValidator;
pub use url::UrlValidator;

use assay_core::Value;
use assay_registry::{codes, messages, Constraint};

use crate::context::ValidationContext;
use crate::error::ConstraintError;
use crate::violation::Violation;

/// A validator was handed a constraint of another kind.
fn mismatch(validator: &str, constraint: &Constraint) -> ConstraintError {
    ConstraintError::internal(format!(
        "{} cannot check a {} constraint",
        validator,
        constraint.kind()
    ))
}

fn unexpected_type(value: &Value, expected: &str) -> Violation {
    Violation::new(
        messages::UNEXPECTED_TYPE,
        codes::UNEXPECTED_TYPE_ERROR,
        value.clone(),
    )
    .with_param("type", expected)
}

/// String form of a value for the string validators.
///
/// `None` means there is nothing to check: the value is null or empty, or it was
/// structured and an unexpected-type violation has been reported.
fn string_value(value: &Value, ctx: &mut ValidationContext<'_>) -> Option<String> {
    if value.is_structured() {
        ctx.report(unexpected_type(value, "string"));
        return None;
    }
    value.to_text().filter(|text| !text.is_empty())
}

/// Remove every whitespace character.
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
