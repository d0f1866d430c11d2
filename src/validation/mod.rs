//! Field validation rule set.
//!
//! Pure, stateless predicates over form-field strings. Every rule answers
//! "is this value acceptable" with a `bool`; invalid input is never an error.
//! Forms call these at field level and aggregate the results into a
//! per-step gate (see [`crate::forms`]).

pub mod check_digit;
pub mod rules;

pub use check_digit::{compute_tax_id_check_digit, TAX_ID_LENGTH, TAX_ID_WEIGHTS};
pub use rules::{
    is_valid_activity_code, is_valid_email, is_valid_national_id,
    is_valid_national_id_conditional, is_valid_phone, is_valid_professional_registry,
    is_valid_tax_id, DENTAL_ACTIVITY_CODES,
};
