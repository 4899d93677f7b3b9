//! Fixed-format string validators: Digit, Luhn and Nif.
//!
//! Values are stringified and stripped of whitespace before checking.

use assay_core::Value;
use assay_registry::{codes, Constraint};

use super::{mismatch, string_value, strip_whitespace};
use crate::context::ValidationContext;
use crate::dispatch::ConstraintValidator;
use crate::error::ConstraintResult;
use crate::violation::Violation;

pub struct DigitValidator;

impl ConstraintValidator for DigitValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Digit { message } = constraint else {
            return Err(mismatch("DigitValidator", constraint));
        };
        let Some(text) = string_value(value, ctx) else {
            return Ok(());
        };
        let digits = strip_whitespace(&text);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            ctx.report(Violation::new(message, codes::DIGIT_ERROR, value.clone()));
        }
        Ok(())
    }
}

/// Luhn sum of a string of ASCII digits.
fn luhn_sum(digits: &str) -> u32 {
    digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}

pub struct LuhnValidator;

impl ConstraintValidator for LuhnValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Luhn { message } = constraint else {
            return Err(mismatch("LuhnValidator", constraint));
        };
        let Some(text) = string_value(value, ctx) else {
            return Ok(());
        };
        let digits = strip_whitespace(&text);
        let code = if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(codes::LUHN_INVALID_CHARACTERS_ERROR)
        } else {
            let sum = luhn_sum(&digits);
            (sum == 0 || sum % 10 != 0).then_some(codes::LUHN_CHECKSUM_FAILED_ERROR)
        };
        if let Some(code) = code {
            ctx.report(Violation::new(message, code, value.clone()));
        }
        Ok(())
    }
}

const NIF_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Check a Spanish DNI (`12345678Z`) or NIE (`X1234567L`).
fn nif_error(nif: &str) -> Option<&'static str> {
    let bytes = nif.as_bytes();
    if bytes.len() != 9 {
        return Some(codes::NIF_INVALID_FORMAT_ERROR);
    }
    let prefix = match bytes[0] {
        b'X' => Some(b'0'),
        b'Y' => Some(b'1'),
        b'Z' => Some(b'2'),
        _ => None,
    };
    let mut number = Vec::with_capacity(8);
    number.push(prefix.unwrap_or(bytes[0]));
    number.extend_from_slice(&bytes[1..8]);
    let letter = bytes[8];
    if !number.iter().all(u8::is_ascii_digit) || !letter.is_ascii_uppercase() {
        return Some(codes::NIF_INVALID_FORMAT_ERROR);
    }
    let n = number
        .iter()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    (NIF_LETTERS[(n % 23) as usize] != letter).then_some(codes::NIF_CHECKSUM_FAILED_ERROR)
}

pub struct NifValidator;

impl ConstraintValidator for NifValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut ValidationContext<'_>,
    ) -> ConstraintResult<()> {
        let Constraint::Nif { message } = constraint else {
            return Err(mismatch("NifValidator", constraint));
        };
        let Some(text) = string_value(value, ctx) else {
            return Ok(());
        };
        let nif = strip_whitespace(&text).to_ascii_uppercase();
        if let Some(code) = nif_error(&nif) {
            ctx.report(Violation::new(message, code, value.clone()));
        }
        Ok(())
    }
}
