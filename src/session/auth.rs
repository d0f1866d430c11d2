//! Authentication backends.

use crate::domain::{DocumentType, EmailAddress, PhoneNumber, ProfessionalRegistry};
use crate::error::{AuthError, AuthResult};
use crate::models::{
    Gender, NaturalPerson, Registration, RegistrationStatus, Role, User,
};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

/// Resolves credentials to a user.
///
/// `Ok(None)` means the credentials were rejected; `Err` is reserved for
/// backend failures.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, identifier: &str, secret: &str) -> AuthResult<Option<User>>;
}

/// Accepts any non-empty identifier and secret and returns a fixed demo client.
#[derive(Debug, Clone, Default)]
pub struct MockAuthenticator;

impl MockAuthenticator {
    pub fn new() -> Self {
        Self
    }

    fn demo_user(identifier: &str) -> AuthResult<User> {
        let invalid = |e: crate::domain::ValidationError| AuthError::Other(e.to_string());

        // The identifier is only used as-is when it is a usable address
        let email = EmailAddress::new(identifier)
            .or_else(|_| EmailAddress::new("juan.perez@example.com"))
            .map_err(invalid)?;

        let profile = NaturalPerson {
            id: "1".to_string(),
            document_type: DocumentType::NationalId,
            document_number: "12345678".to_string(),
            names: "Juan".to_string(),
            surnames: "Pérez".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1)
                .ok_or_else(|| AuthError::Other("invalid demo birth date".to_string()))?,
            gender: Gender::Male,
            phone: PhoneNumber::new("+57 300 123 4567").map_err(invalid)?,
            email,
            address: "Calle 123 #45-67".to_string(),
            city: "Bogotá".to_string(),
            department: "Cundinamarca".to_string(),
            profession: "Odontólogo General".to_string(),
            specialization: Some("Ortodoncia".to_string()),
            professional_registry: Some(ProfessionalRegistry::new("RTH123456").map_err(invalid)?),
            biometric: None,
            status: RegistrationStatus::Pending,
            sales_office: None,
            initial_fee: None,
            created_at: Utc::now(),
        };

        Ok(User {
            id: "1".to_string(),
            email: identifier.to_string(),
            role: Role::Client,
            active: true,
            profile: Registration::Natural(profile),
        })
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, identifier: &str, secret: &str) -> AuthResult<Option<User>> {
        if identifier.is_empty() || secret.is_empty() {
            return Ok(None);
        }
        Self::demo_user(identifier).map(Some)
    }
}
