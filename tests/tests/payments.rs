//! Payment scenarios: banking identifiers, amounts and free-text fields.

use assay_tests::prelude::*;

fn payments() -> Scenario {
    Scenario::new("payments")
        .schema("payments/schema.yaml")
        .cases("payments/transfers.yaml")
        .class("Payment")
}

#[test]
fn test_valid_and_empty_payments() {
    payments()
        .case("valid_payment", |a| a.valid())
        .case("empty_payment", |a| a.valid())
        .run()
        .unwrap();
}

#[test]
fn test_iban() {
    payments()
        .case("iban_lowercase", |a| a.valid())
        .case("iban_bad_checksum", |a| {
            a.violations(1)
                .at_code("iban", codes::IBAN_CHECKSUM_FAILED_ERROR)
                .message("This is not a valid International Bank Account Number (IBAN)")
        })
        .case("iban_unsupported_country", |a| {
            a.violations(1).at_code("iban", codes::IBAN_NOT_SUPPORTED_COUNTRY_CODE_ERROR)
        })
        .case("iban_wrong_length", |a| {
            a.violations(1).at_code("iban", codes::IBAN_INVALID_FORMAT_ERROR)
        })
        .case("iban_symbols", |a| {
            a.violations(1).at_code("iban", codes::IBAN_INVALID_CHARACTERS_ERROR)
        })
        .run()
        .unwrap();
}

#[test]
fn test_card_numbers() {
    payments()
        .case("card_with_dashes", |a| {
            a.violations(1).at_code("card", codes::LUHN_INVALID_CHARACTERS_ERROR)
        })
        .case("card_bad_checksum", |a| {
            a.violations(1).at_code("card", codes::LUHN_CHECKSUM_FAILED_ERROR)
        })
        .case("card_all_zeros", |a| {
            a.violations(1).at_code("card", codes::LUHN_CHECKSUM_FAILED_ERROR)
        })
        .case("card_as_number", |a| a.valid())
        .run()
        .unwrap();
}

#[test]
fn test_tax_ids_and_pins() {
    payments()
        .case("nie_tax_id", |a| a.valid())
        .case("nif_wrong_letter", |a| {
            a.violations(1).at_code("taxId", codes::NIF_CHECKSUM_FAILED_ERROR)
        })
        .case("nif_too_short", |a| {
            a.violations(1).at_code("taxId", codes::NIF_INVALID_FORMAT_ERROR)
        })
        .case("pin_with_letters", |a| {
            a.violations(1).at_code("pin", codes::DIGIT_ERROR)
        })
        .run()
        .unwrap();
}

#[test]
fn test_amount_bounds() {
    payments()
        .case("amount_zero", |a| {
            a.violations(1)
                .at_code("amount", codes::TOO_LOW_ERROR)
                .param("limit", "0.01")
        })
        .case("amount_at_limit", |a| a.valid())
        .case("amount_too_high", |a| {
            a.violations(1)
                .at_code("amount", codes::TOO_HIGH_ERROR)
                .message("This value should be 10000 or less")
        })
        .case("amount_as_text", |a| {
            a.violations(2).at_code("amount", codes::INVALID_NUMBER_ERROR)
        })
        .run()
        .unwrap();
}

#[test]
fn test_text_patterns_and_lengths() {
    payments()
        .case("reference_lowercase", |a| {
            a.violations(1)
                .at_code("reference", codes::REGEX_FAILED_ERROR)
                .param("pattern", "^[A-Z]{3}-[0-9]{4}$")
        })
        .case("memo_leaks_secret", |a| {
            a.violations(1)
                .at_code("memo", codes::REGEX_FAILED_ERROR)
                .message("Do not share \"my password is hunter2\"")
        })
        .case("notes_too_long", |a| {
            a.violations(1)
                .at_code("notes", codes::TOO_LONG_ERROR)
                .param("charset", "graphemes")
                .param("length", "21")
        })
        .case("notes_family_emoji", |a| a.valid())
        .run()
        .unwrap();
}
