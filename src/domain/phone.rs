//! PhoneNumber value object.

use super::errors::ValidationError;
use crate::validation::is_valid_phone;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A Colombian mobile phone number.
///
/// The number is kept as entered (spacing included); validation ignores
/// whitespace.
///
/// # Example
///
/// ```
/// use dental_registry::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+57 300 123 4567").unwrap();
/// assert_eq!(phone.digits_only(), "573001234567");
/// assert_eq!(phone.subscriber(), "3001234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the number is `+57`
    /// followed by a ten-digit mobile number starting with 3.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// The ten-digit mobile number without the country code.
    pub fn subscriber(&self) -> String {
        let digits = self.digits_only();
        digits.strip_prefix("57").unwrap_or(&digits).to_string()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
