//! Natural-person registration: personal, contact, professional and biometric steps.

use super::errors::FieldErrors;
use super::fields::{
    field_error, non_blank, optional_with, parse_date, required, required_date, required_with,
};
use super::wizard::{FormSteps, RecordMeta};
use crate::domain::{DocumentType, EmailAddress, PhoneNumber, ProfessionalRegistry};
use crate::models::{Gender, NaturalPerson, Registration, RegistrationStatus};
use crate::validation::{
    is_valid_email, is_valid_national_id_conditional, is_valid_phone,
    is_valid_professional_registry,
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Minimum age, counted the way the form does: 18 years of 365 days.
const ADULT_AGE_DAYS: u64 = 18 * 365;

/// Field values of the natural-person form, as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaturalPersonInput {
    pub document_type: DocumentType,
    pub document_number: String,
    pub names: String,
    pub surnames: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub department: String,
    pub profession: String,
    pub specialization: String,
    pub professional_registry: String,
}

impl NaturalPersonInput {
    fn validate_personal(&self, today: NaiveDate, errors: &mut FieldErrors) {
        let doc_type = self.document_type;
        required_with(
            errors,
            "document_number",
            &self.document_number,
            "Número de documento requerido",
            |v| is_valid_national_id_conditional(v, doc_type),
            "Número de cédula inválido",
        );
        required(errors, "names", &self.names, "Nombres requeridos");
        required(errors, "surnames", &self.surnames, "Apellidos requeridos");

        if let Some(birth) = required_date(
            errors,
            "birth_date",
            &self.birth_date,
            "Fecha de nacimiento requerida",
        ) {
            let latest = today
                .checked_sub_days(Days::new(ADULT_AGE_DAYS))
                .unwrap_or(NaiveDate::MIN);
            if birth > latest {
                errors.add("birth_date", "Debe ser mayor de 18 años");
            }
        }
    }

    fn validate_contact(&self, errors: &mut FieldErrors) {
        required_with(
            errors,
            "phone",
            &self.phone,
            "Teléfono requerido",
            is_valid_phone,
            "Formato de teléfono inválido",
        );
        required_with(
            errors,
            "email",
            &self.email,
            "Email requerido",
            is_valid_email,
            "Email inválido",
        );
        required(errors, "address", &self.address, "Dirección requerida");
        required(errors, "department", &self.department, "Departamento requerido");
        required(errors, "city", &self.city, "Ciudad requerida");
    }

    fn validate_professional(&self, errors: &mut FieldErrors) {
        required(errors, "profession", &self.profession, "Profesión requerida");
        optional_with(
            errors,
            "professional_registry",
            &self.professional_registry,
            is_valid_professional_registry,
            "Número ReTHUS inválido",
        );
    }
}

impl FormSteps for NaturalPersonInput {
    const STEPS: &'static [&'static str] = &[
        "Información Personal",
        "Contacto y Ubicación",
        "Información Profesional",
        "Validación Biométrica",
    ];

    fn validate_step(&self, step: usize, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            1 => self.validate_personal(today, &mut errors),
            2 => self.validate_contact(&mut errors),
            3 => self.validate_professional(&mut errors),
            // biometric capture is optional
            _ => {}
        }
        errors
    }

    fn build(&self, meta: RecordMeta) -> Result<Registration, FieldErrors> {
        let birth_date = parse_date(&self.birth_date).ok_or_else(|| {
            let mut errors = FieldErrors::new();
            errors.add("birth_date", "Fecha inválida");
            errors
        })?;

        let professional_registry = if self.professional_registry.trim().is_empty() {
            None
        } else {
            Some(
                ProfessionalRegistry::new(self.professional_registry.as_str())
                    .map_err(field_error("professional_registry"))?,
            )
        };

        let person = NaturalPerson {
            id: meta.id,
            document_type: self.document_type,
            document_number: self.document_number.trim().to_string(),
            names: self.names.trim().to_string(),
            surnames: self.surnames.trim().to_string(),
            birth_date,
            gender: self.gender,
            phone: PhoneNumber::new(self.phone.as_str()).map_err(field_error("phone"))?,
            email: EmailAddress::new(self.email.as_str()).map_err(field_error("email"))?,
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            department: self.department.trim().to_string(),
            profession: self.profession.trim().to_string(),
            specialization: non_blank(&self.specialization),
            professional_registry,
            biometric: meta.biometric,
            status: RegistrationStatus::Pending,
            sales_office: None,
            initial_fee: None,
            created_at: meta.created_at,
        };

        Ok(Registration::Natural(person))
    }
}
