//! TaxId (NIT) value object.

use super::errors::ValidationError;
use crate::validation::is_valid_tax_id;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A company tax identification number (NIT) with a verified check digit.
///
/// # Example
///
/// ```
/// use dental_registry::domain::TaxId;
///
/// let nit = TaxId::new("900123456-6").unwrap();
/// assert_eq!(nit.base(), "900123456");
/// assert_eq!(nit.check_digit(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(String);

impl TaxId {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTaxId` when the length or the check
    /// digit is wrong.
    pub fn new(nit: impl Into<String>) -> Result<Self, ValidationError> {
        let nit = nit.into();

        if !is_valid_tax_id(&nit) {
            return Err(ValidationError::InvalidTaxId(nit));
        }

        Ok(Self(nit))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The nine base digits, separator removed.
    pub fn base(&self) -> String {
        let mut chars = self.0.chars();
        chars.next_back();
        chars.filter(|c| c.is_ascii_digit()).collect()
    }

    pub fn check_digit(&self) -> u8 {
        self.0
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
            .unwrap_or_default()
    }
}

impl Serialize for TaxId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TaxId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TaxId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
