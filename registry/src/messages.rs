//! Default message templates.
//!
//! Templates keep their `{{ placeholder }}` markers; rendering and translation
//! happen outside the engine.

pub const NOT_NULL: &str = "This value should not be null";
pub const NULL: &str = "This value should be null";
pub const NOT_BLANK: &str = "This value should not be blank";
pub const BLANK: &str = "This value should be blank";
pub const ASSERT_TRUE: &str = "This value should be true";

pub const MIN: &str = "This value should be {{ limit }} or more";
pub const MAX: &str = "This value should be {{ limit }} or less";
pub const INVALID_NUMBER: &str = "This value should be a valid number";
pub const NOT_IN_RANGE: &str = "This value should be between {{ min }} and {{ max }}";

pub const MIN_LENGTH: &str =
    "This value is too short. It should have {{ limit }} characters or more";
pub const MAX_LENGTH: &str =
    "This value is too long. It should have {{ limit }} characters or less";

pub const REGEX: &str = "This value is not valid";
pub const EMAIL: &str = "This value is not a valid email address";
pub const URL: &str = "This value is not a valid URL";

pub const FILE_NOT_FOUND: &str = "The file could not be found";
pub const FILE_NOT_READABLE: &str = "The file is not readable";
pub const FILE_TOO_LARGE: &str =
    "The file is too large ({{ size }}). Allowed maximum size is {{ limit }}";
pub const FILE_MIME_TYPE: &str =
    "The mime type of the file is invalid ({{ type }}). Allowed mime types are {{ types }}";

pub const COLLECTION_EXTRA_FIELDS: &str = "The fields {{ fields }} were not expected";
pub const COLLECTION_MISSING_FIELDS: &str = "The fields {{ fields }} are missing";

pub const PROPERTIES_INEQUALITY: &str =
    "The value of {{ first }} should be less than the value of {{ second }}";
pub const DATE_ORDER: &str = "The date {{ start }} should be before {{ end }}";

pub const DIGIT: &str = "This value should contain digits only";
pub const IBAN: &str = "This is not a valid International Bank Account Number (IBAN)";
pub const LUHN: &str = "Invalid card number";
pub const NIF: &str = "This is not a valid NIF";

/// Used when a value has a type the constraint cannot inspect.
pub const UNEXPECTED_TYPE: &str = "This value should be of type {{ type }}";
