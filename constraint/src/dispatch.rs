//! Kind to validator dispatch.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use assay_core::Value;
use assay_registry::{Constraint, ConstraintKind};

use crate::context::ValidationContext;
use crate::error::{ConstraintError, ConstraintResult};
use crate::validators::*;

/// Checks a value against one constraint kind.
///
/// Implementations are stateless. Failures are reported through `ctx`; an `Err`
/// is reserved for configuration problems.
pub trait ConstraintValidator: Send + Sync {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()>;
}

/// Static table mapping each constraint kind to its validator.
#[derive(Clone, Default)]
pub struct ValidatorTable {
    validators: HashMap<ConstraintKind, &'static dyn ConstraintValidator>,
}

impl ValidatorTable {
    /// A table with no validators.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table with a validator for every catalog kind.
    pub fn standard() -> Self {
        Self::empty()
            .with(ConstraintKind::NotNull, &NotNullValidator)
            .with(ConstraintKind::Null, &NullValidator)
            .with(ConstraintKind::NotBlank, &NotBlankValidator)
            .with(ConstraintKind::Blank, &BlankValidator)
            .with(ConstraintKind::AssertTrue, &AssertTrueValidator)
            .with(ConstraintKind::Min, &MinValidator)
            .with(ConstraintKind::Max, &MaxValidator)
            .with(ConstraintKind::Range, &RangeValidator)
            .with(ConstraintKind::MinLength, &MinLengthValidator)
            .with(ConstraintKind::MaxLength, &MaxLengthValidator)
            .with(ConstraintKind::Regex, &RegexValidator)
            .with(ConstraintKind::Email, &EmailValidator)
            .with(ConstraintKind::Url, &UrlValidator)
            .with(ConstraintKind::File, &FileValidator)
            .with(ConstraintKind::Collection, &CollectionValidator)
            .with(ConstraintKind::All, &AllValidator)
            .with(ConstraintKind::Each, &AllValidator)
            .with(ConstraintKind::Required, &ExistenceValidator)
            .with(ConstraintKind::Optional, &ExistenceValidator)
            .with(ConstraintKind::PropertiesInequality, &PropertiesInequalityValidator)
            .with(ConstraintKind::DateOrder, &DateOrderValidator)
            .with(ConstraintKind::Digit, &DigitValidator)
            .with(ConstraintKind::Iban, &IbanValidator)
            .with(ConstraintKind::Luhn, &LuhnValidator)
            .with(ConstraintKind::Nif, &NifValidator)
    }

    /// The shared standard table.
    pub fn standard_ref() -> &'static ValidatorTable {
        static STANDARD: OnceLock<ValidatorTable> = OnceLock::new();
        STANDARD.get_or_init(ValidatorTable::standard)
    }

    /// Builder-style registration. Replaces any validator already bound to `kind`.
    pub fn with(mut self, kind: ConstraintKind, validator: &'static dyn ConstraintValidator) -> Self {
        self.register(kind, validator);
        self
    }

    pub fn register(&mut self, kind: ConstraintKind, validator: &'static dyn ConstraintValidator) {
        self.validators.insert(kind, validator);
    }

    /// Look up the validator for a kind.
    pub fn get(&self, kind: ConstraintKind) -> ConstraintResult<&'static dyn ConstraintValidator> {
        self.validators
            .get(&kind)
            .copied()
            .ok_or_else(|| ConstraintError::unknown_constraint(kind))
    }

    pub fn contains(&self, kind: ConstraintKind) -> bool {
        self.validators.contains_key(&kind)
    }

    /// Registered kinds, in catalog order.
    pub fn kinds(&self) -> Vec<ConstraintKind> {
        let mut kinds: Vec<_> = self.validators.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl fmt::Debug for ValidatorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorTable")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violation::Violation;

    struct AlwaysFails;

    impl ConstraintValidator for AlwaysFails {
        fn validate(
            &self,
            value: &Value,
            _constraint: &Constraint,
            ctx: &mut ValidationContext<'_>,
        ) -> ConstraintResult<()> {
            ctx.report(Violation::new("Nope", "custom.nope.v1", value.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_standard_table_covers_every_kind() {
        let table = ValidatorTable::standard();
        for kind in ConstraintKind::ALL {
            assert!(table.contains(kind), "{}", kind);
        }
        assert_eq!(table.kinds(), ConstraintKind::ALL.to_vec());
    }

    #[test]
    fn test_missing_validator_is_unknown_constraint() {
        // GIVEN
        let table = ValidatorTable::empty().with(ConstraintKind::NotNull, &NotNullValidator);
        let mut ctx = ValidationContext::new(&table);

        // WHEN
        let result = ctx.validate(&Value::Null, &Constraint::email());

        // THEN
        assert_eq!(
            result,
            Err(ConstraintError::unknown_constraint(ConstraintKind::Email))
        );
        assert_eq!(ctx.violation_count(), 0);
    }

    #[test]
    fn test_custom_validator_replaces_standard_one() {
        let table = ValidatorTable::standard().with(ConstraintKind::NotNull, &AlwaysFails);
        let mut ctx = ValidationContext::new(&table);
        ctx.validate(&Value::Int(1), &Constraint::not_null()).unwrap();
        assert_eq!(ctx.into_violations().codes(), vec!["custom.nope.v1"]);
    }
}
