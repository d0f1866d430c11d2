//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required value is empty.
    Empty(&'static str),

    /// The provided national ID (cédula) is invalid.
    InvalidNationalId(String),

    /// The provided NIT fails the length or check-digit rule.
    InvalidTaxId(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is not a Colombian mobile number.
    InvalidPhone(String),

    /// The provided CIIU code is not a dental activity.
    InvalidActivityCode(String),

    /// The provided ReTHUS number is malformed.
    InvalidProfessionalRegistry(String),

    /// The value does not name a known variant.
    UnknownVariant { kind: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(what) => write!(f, "{} cannot be empty", what),
            Self::InvalidNationalId(id) => write!(f, "Invalid national ID: {}", id),
            Self::InvalidTaxId(nit) => write!(f, "Invalid NIT: {}", nit),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidActivityCode(code) => {
                write!(f, "CIIU code {} is not a dental activity", code)
            }
            Self::InvalidProfessionalRegistry(rethus) => {
                write!(f, "Invalid ReTHUS number: {}", rethus)
            }
            Self::UnknownVariant { kind, value } => write!(f, "Unknown {}: {}", kind, value),
        }
    }
}

impl std::error::Error for ValidationError {}
