//! Identity documents: document type and national ID.

use super::errors::ValidationError;
use crate::validation::is_valid_national_id;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Kind of identity document a natural person registers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Colombian cédula de ciudadanía.
    #[default]
    #[serde(alias = "cedula")]
    NationalId,
    #[serde(alias = "pasaporte")]
    Passport,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::Passport => "passport",
        }
    }
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "national_id" | "cedula" => Ok(Self::NationalId),
            "passport" | "pasaporte" => Ok(Self::Passport),
            other => Err(ValidationError::UnknownVariant {
                kind: "document type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A national ID number: 7 to 10 ASCII digits.
///
/// # Example
///
/// ```
/// use dental_registry::domain::NationalId;
///
/// assert!(NationalId::new("1234567").is_ok());
/// assert!(NationalId::new("12a4567").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalId(String);

impl NationalId {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidNationalId` for anything other than
    /// 7 to 10 ASCII digits.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();

        if !is_valid_national_id(&id) {
            return Err(ValidationError::InvalidNationalId(id));
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for NationalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NationalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NationalId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
