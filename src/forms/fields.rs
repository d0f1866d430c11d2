//! Shared field checks used by the form gates.

use super::errors::FieldErrors;
use crate::domain::ValidationError;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Record `message` when `value` is blank. Returns whether a value is present.
pub(crate) fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> bool {
    if value.trim().is_empty() {
        errors.add(field, message);
        return false;
    }
    true
}

/// Required field that must also satisfy `rule`.
pub(crate) fn required_with(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    missing: &str,
    rule: impl Fn(&str) -> bool,
    invalid: &str,
) {
    if required(errors, field, value, missing) && !rule(value) {
        errors.add(field, invalid);
    }
}

/// Optional field: only checked when something other than whitespace was entered.
pub(crate) fn optional_with(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    rule: impl Fn(&str) -> bool,
    invalid: &str,
) {
    if !value.trim().is_empty() && !rule(value) {
        errors.add(field, invalid);
    }
}

/// Parse a required `YYYY-MM-DD` date field.
pub(crate) fn required_date(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    missing: &str,
) -> Option<NaiveDate> {
    if !required(errors, field, value, missing) {
        return None;
    }
    match parse_date(value) {
        Some(date) => Some(date),
        None => {
            errors.add(field, "Fecha inválida");
            None
        }
    }
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Map a value-object construction error onto a single field.
pub(crate) fn field_error(field: &'static str) -> impl Fn(ValidationError) -> FieldErrors {
    move |e| {
        let mut errors = FieldErrors::new();
        errors.add(field, e.to_string());
        errors
    }
}

/// Trimmed copy of an optional text field, `None` when blank.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
