//! CIIU economic activity codes and ReTHUS registry numbers.

use super::errors::ValidationError;
use crate::validation::{is_valid_activity_code, is_valid_professional_registry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Economic activity codes recognized for dental and medical practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ActivityCode {
    /// 8622 - dental practice
    DentalPractice,
    /// 8621 - general medical practice
    GeneralMedicalPractice,
    /// 8690 - other human health activities
    OtherHealthActivities,
}

impl ActivityCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DentalPractice => "8622",
            Self::GeneralMedicalPractice => "8621",
            Self::OtherHealthActivities => "8690",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::DentalPractice => "Actividades de la práctica odontológica",
            Self::GeneralMedicalPractice => "Actividades de la práctica médica general",
            Self::OtherHealthActivities => "Otras actividades de atención de la salud humana",
        }
    }
}

impl FromStr for ActivityCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_activity_code(s) {
            return Err(ValidationError::InvalidActivityCode(s.to_string()));
        }
        Ok(match s {
            "8622" => Self::DentalPractice,
            "8621" => Self::GeneralMedicalPractice,
            _ => Self::OtherHealthActivities,
        })
    }
}

impl TryFrom<String> for ActivityCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActivityCode> for String {
    fn from(code: ActivityCode) -> Self {
        code.code().to_string()
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// ReTHUS professional health-registry number, stored upper-cased.
///
/// # Example
///
/// ```
/// use dental_registry::domain::ProfessionalRegistry;
///
/// let rethus = ProfessionalRegistry::new("rth1234567").unwrap();
/// assert_eq!(rethus.as_str(), "RTH1234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfessionalRegistry(String);

impl ProfessionalRegistry {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidProfessionalRegistry` unless the value
    /// is `RTH` followed by 6 to 8 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !is_valid_professional_registry(&value) {
            return Err(ValidationError::InvalidProfessionalRegistry(value));
        }

        Ok(Self(value.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProfessionalRegistry {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProfessionalRegistry> for String {
    fn from(value: ProfessionalRegistry) -> Self {
        value.0
    }
}

impl fmt::Display for ProfessionalRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
