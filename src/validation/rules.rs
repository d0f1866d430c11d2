//! Field-level predicates.

use super::check_digit::{compute_tax_id_check_digit, split_tax_id};
use crate::domain::DocumentType;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

// ASCII classes on purpose: `\d` in the regex crate matches any Unicode digit.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?57\s?3[0-9]{9}$").expect("Failed to compile phone regex")
});

static RETHUS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^RTH[0-9]{6,8}$").expect("Failed to compile ReTHUS regex")
});

/// CIIU codes accepted for dental and medical practice.
pub const DENTAL_ACTIVITY_CODES: [&str; 3] = ["8622", "8621", "8690"];

/// National ID (cédula): 7 to 10 ASCII digits.
pub fn is_valid_national_id(value: &str) -> bool {
    (7..=10).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

/// Company tax ID (NIT): nine base digits, one separator and a check digit.
///
/// Anything that is not exactly 11 characters long is rejected before the
/// check digit is computed.
pub fn is_valid_tax_id(value: &str) -> bool {
    let Some((base, check)) = split_tax_id(value) else {
        return false;
    };

    match compute_tax_id_check_digit(&base) {
        Some(digit) => digit.to_string() == check.to_string(),
        None => false,
    }
}

/// Minimal `local@domain.tld` shape check.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Colombian mobile number: optional `+`, country code 57, then `3` and nine digits.
///
/// All whitespace is removed before matching, so `+57 300 123 4567` passes.
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_REGEX.is_match(&compact)
}

/// ReTHUS professional registry number: `RTH` and 6 to 8 digits, any case.
///
/// The field is optional; callers skip this rule when the value is empty.
pub fn is_valid_professional_registry(value: &str) -> bool {
    RETHUS_REGEX.is_match(value)
}

/// Economic activity code restricted to [`DENTAL_ACTIVITY_CODES`].
pub fn is_valid_activity_code(value: &str) -> bool {
    DENTAL_ACTIVITY_CODES.contains(&value)
}

/// Document number checked against its sibling document-type field.
///
/// Only national IDs have a format; passports are accepted as entered.
pub fn is_valid_national_id_conditional(value: &str, document_type: DocumentType) -> bool {
    match document_type {
        DocumentType::NationalId => is_valid_national_id(value),
        DocumentType::Passport => true,
    }
}
