//! Stable error codes carried by violations.
//!
//! Codes let callers discriminate failure reasons without parsing message
//! text. The `.v1` suffix is bumped only when a code changes meaning.

pub const NOT_NULL_ERROR: &str = "not_null.is_null.v1";
pub const NULL_ERROR: &str = "null.not_null.v1";
pub const NOT_BLANK_ERROR: &str = "not_blank.is_blank.v1";
pub const BLANK_ERROR: &str = "blank.not_blank.v1";
pub const ASSERT_TRUE_ERROR: &str = "assert_true.not_true.v1";

pub const TOO_LOW_ERROR: &str = "min.too_low.v1";
pub const TOO_HIGH_ERROR: &str = "max.too_high.v1";
pub const INVALID_NUMBER_ERROR: &str = "range.invalid.v1";
pub const RANGE_TOO_LOW_ERROR: &str = "range.too_low.v1";
pub const RANGE_TOO_HIGH_ERROR: &str = "range.too_high.v1";
pub const NOT_IN_RANGE_ERROR: &str = "range.not_in_range.v1";

pub const TOO_SHORT_ERROR: &str = "length.too_short.v1";
pub const TOO_LONG_ERROR: &str = "length.too_long.v1";

pub const REGEX_FAILED_ERROR: &str = "regex.failed.v1";

pub const EMAIL_INVALID_FORMAT_ERROR: &str = "email.invalid_format.v1";
pub const EMAIL_MX_CHECK_FAILED_ERROR: &str = "email.mx_check_failed.v1";

pub const URL_INVALID_ERROR: &str = "url.invalid.v1";

pub const FILE_NOT_FOUND_ERROR: &str = "file.not_found.v1";
pub const FILE_NOT_READABLE_ERROR: &str = "file.not_readable.v1";
pub const FILE_TOO_LARGE_ERROR: &str = "file.too_large.v1";
pub const FILE_INVALID_MIME_TYPE_ERROR: &str = "file.invalid_mime_type.v1";

pub const MISSING_FIELD_ERROR: &str = "collection.missing_field.v1";
pub const NO_SUCH_FIELD_ERROR: &str = "collection.extra_field.v1";

pub const PROPERTIES_INEQUALITY_ERROR: &str = "properties_inequality.failed.v1";
pub const DATE_ORDER_ERROR: &str = "date_order.failed.v1";
pub const DATE_ORDER_INVALID_DATE_ERROR: &str = "date_order.invalid_date.v1";

pub const DIGIT_ERROR: &str = "digit.not_digits.v1";

pub const IBAN_INVALID_COUNTRY_CODE_ERROR: &str = "iban.invalid_country_code.v1";
pub const IBAN_INVALID_CHARACTERS_ERROR: &str = "iban.invalid_characters.v1";
pub const IBAN_NOT_SUPPORTED_COUNTRY_CODE_ERROR: &str = "iban.not_supported_country_code.v1";
pub const IBAN_INVALID_FORMAT_ERROR: &str = "iban.invalid_format.v1";
pub const IBAN_CHECKSUM_FAILED_ERROR: &str = "iban.checksum_failed.v1";

pub const LUHN_INVALID_CHARACTERS_ERROR: &str = "luhn.invalid_characters.v1";
pub const LUHN_CHECKSUM_FAILED_ERROR: &str = "luhn.checksum_failed.v1";

pub const NIF_INVALID_FORMAT_ERROR: &str = "nif.invalid_format.v1";
pub const NIF_CHECKSUM_FAILED_ERROR: &str = "nif.checksum_failed.v1";

pub const UNEXPECTED_TYPE_ERROR: &str = "type.unexpected.v1";
