//! Registration records for natural persons and companies.

use crate::domain::{
    ActivityCode, DocumentType, EmailAddress, PhoneNumber, ProfessionalRegistry, TaxId,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Review state of a registration. New registrations start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Validated,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

/// Legal form of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
    /// Sociedad por Acciones Simplificada
    #[default]
    Sas,
    /// Sociedad Limitada
    Ltda,
    /// Sociedad Anónima
    Sa,
    Cooperative,
    Foundation,
}

/// Biometric method used to verify identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiometricKind {
    Fingerprint,
    Face,
}

impl BiometricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fingerprint => "fingerprint",
            Self::Face => "face",
        }
    }
}

/// Result of a successful biometric capture attached to a registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricData {
    pub kind: BiometricKind,
    /// Opaque token returned by the scanner
    pub hash: String,
    pub validated: bool,
    pub registered_at: DateTime<Utc>,
}

impl BiometricData {
    /// Record a token captured just now.
    pub fn captured(kind: BiometricKind, hash: impl Into<String>) -> Self {
        Self {
            kind,
            hash: hash.into(),
            validated: true,
            registered_at: Utc::now(),
        }
    }
}

/// A dental professional registering as a natural person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturalPerson {
    pub id: String,
    pub document_type: DocumentType,
    /// Checked as a national ID only when `document_type` is `NationalId`
    pub document_number: String,
    pub names: String,
    pub surnames: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub address: String,
    pub city: String,
    pub department: String,
    pub profession: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_registry: Option<ProfessionalRegistry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometric: Option<BiometricData>,
    #[serde(default)]
    pub status: RegistrationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_office: Option<String>,
    /// Initial fee in Colombian pesos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_fee: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl NaturalPerson {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.names, self.surnames)
    }
}

/// The person legally representing a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalRepresentative {
    pub names: String,
    pub surnames: String,
    pub document_type: DocumentType,
    pub document_number: String,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
}

/// Company-level contact and location details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyContact {
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub address: String,
    pub city: String,
    pub department: String,
}

/// A dental practice or clinic registering as a legal entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub legal_name: String,
    pub tax_id: TaxId,
    pub company_type: CompanyType,
    pub incorporation_date: NaiveDate,
    pub legal_representative: LegalRepresentative,
    pub contact: CompanyContact,
    pub economic_activity: String,
    pub activity_code: ActivityCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometric: Option<BiometricData>,
    #[serde(default)]
    pub status: RegistrationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_office: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_fee: Option<u64>,
    pub created_at: DateTime<Utc>,
}

/// Which kind of registrant a user is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrantKind {
    Natural,
    Company,
}

/// A registration is either a natural person or a company, never both.
///
/// Serialized with an explicit `kind` tag:
///
/// ```json
/// { "kind": "company", "legal_name": "...", ... }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Registration {
    Natural(NaturalPerson),
    Company(Company),
}

impl Registration {
    pub fn kind(&self) -> RegistrantKind {
        match self {
            Self::Natural(_) => RegistrantKind::Natural,
            Self::Company(_) => RegistrantKind::Company,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Natural(person) => &person.id,
            Self::Company(company) => &company.id,
        }
    }

    /// Person's full name or the company's legal name.
    pub fn display_name(&self) -> String {
        match self {
            Self::Natural(person) => person.full_name(),
            Self::Company(company) => company.legal_name.clone(),
        }
    }

    pub fn status(&self) -> RegistrationStatus {
        match self {
            Self::Natural(person) => person.status,
            Self::Company(company) => company.status,
        }
    }

    pub fn biometric(&self) -> Option<&BiometricData> {
        match self {
            Self::Natural(person) => person.biometric.as_ref(),
            Self::Company(company) => company.biometric.as_ref(),
        }
    }

    pub fn email(&self) -> &EmailAddress {
        match self {
            Self::Natural(person) => &person.email,
            Self::Company(company) => &company.contact.email,
        }
    }
}
