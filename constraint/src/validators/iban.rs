//! International Bank Account Number check.
//!
//! Steps, each with its own code: country code letters, alphanumeric body,
//! supported country, per-country length with numeric check digits, then mod-97.

use assay_core::Value;
use assay_registry::{codes, Constraint};

use super::{mismatch, string_value, strip_whitespace};
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

/// IBAN length by country code, sorted by country.
#[rustfmt::skip]
const IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20), ("BE", 16),
    ("BG", 22), ("BH", 22), ("BR", 29), ("BY", 28), ("CH", 21), ("CR", 22), ("CY", 28),
    ("CZ", 24), ("DE", 22), ("DK", 18), ("DO", 28), ("EE", 20), ("EG", 29), ("ES", 24),
    ("FI", 18), ("FO", 18), ("FR", 27), ("GB", 22), ("GE", 22), ("GI", 23), ("GL", 18),
    ("GR", 27), ("GT", 28), ("HR", 21), ("HU", 28), ("IE", 22), ("IL", 23), ("IQ", 23),
    ("IS", 26), ("IT", 27), ("JO", 30), ("KW", 30), ("KZ", 20), ("LB", 28), ("LC", 32),
    ("LI", 21), ("LT", 20), ("LU", 20), ("LV", 21), ("MC", 27), ("MD", 24), ("ME", 22),
    ("MK", 19), ("MR", 27), ("MT", 31), ("MU", 30), ("NL", 18), ("NO", 15), ("PK", 24),
    ("PL", 28), ("PS", 29), ("PT", 25), ("QA", 29), ("RO", 24), ("RS", 22), ("SA", 24),
    ("SC", 31), ("SE", 24), ("SI", 19), ("SK", 24), ("SM", 27), ("ST", 25), ("SV", 28),
    ("TL", 23), ("TN", 24), ("TR", 26), ("UA", 29), ("VA", 22), ("VG", 24), ("XK", 20),
];

fn iban_length(country: &str) -> Option<usize> {
    IBAN_LENGTHS
        .binary_search_by(|(code, _)| (*code).cmp(country))
        .ok()
        .map(|i| IBAN_LENGTHS[i].1)
}

/// Remainder of the rearranged IBAN (country and check digits moved to the end,
/// letters expanded to 10..35) modulo 97.
fn mod97(iban: &str) -> u32 {
    let (head, tail) = iban.split_at(4);
    tail.chars().chain(head.chars()).fold(0u32, |acc, c| {
        let n = c.to_digit(36).unwrap_or(0);
        if n >= 10 {
            (acc * 100 + n) % 97
        } else {
            (acc * 10 + n) % 97
        }
    })
}

/// Failure code for a normalised (uppercase, no whitespace) IBAN.
fn iban_error(iban: &str) -> Option<&'static str> {
    let bytes = iban.as_bytes();
    if bytes.len() < 2 || !bytes[..2].iter().all(u8::is_ascii_uppercase) {
        return Some(codes::IBAN_INVALID_COUNTRY_CODE_ERROR);
    }
    if !bytes
        .iter()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    {
        return Some(codes::IBAN_INVALID_CHARACTERS_ERROR);
    }
    let Some(length) = iban_length(&iban[..2]) else {
        return Some(codes::IBAN_NOT_SUPPORTED_COUNTRY_CODE_ERROR);
    };
    if bytes.len() != length || !bytes[2..4].iter().all(u8::is_ascii_digit) {
        return Some(codes::IBAN_INVALID_FORMAT_ERROR);
    }
    (mod97(iban) != 1).then_some(codes::IBAN_CHECKSUM_FAILED_ERROR)
}

pub struct IbanValidator;

impl ConstraintValidator for IbanValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Iban { message } = constraint else {
            return Err(mismatch("IbanValidator", constraint));
        };
        let Some(text) = string_value(value, ctx) else {
            return Ok(());
        };
        let iban = strip_whitespace(&text).to_ascii_uppercase();
        if let Some(code) = iban_error(&iban) {
            ctx.report(Violation::new(message, code, value.clone()));
        }
        Ok(())
    }
}
