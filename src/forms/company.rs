//! Company registration: company, representative, contact, activity and biometric steps.

use super::errors::FieldErrors;
use super::fields::{field_error, parse_date, required, required_date, required_with};
use super::wizard::{FormSteps, RecordMeta};
use crate::domain::{ActivityCode, DocumentType, EmailAddress, PhoneNumber, TaxId};
use crate::models::{
    Company, CompanyContact, CompanyType, LegalRepresentative, Registration, RegistrationStatus,
};
use crate::validation::{
    is_valid_activity_code, is_valid_email, is_valid_national_id_conditional, is_valid_phone,
    is_valid_tax_id,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalRepresentativeInput {
    pub names: String,
    pub surnames: String,
    pub document_type: DocumentType,
    pub document_number: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyContactInput {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub department: String,
}

/// Field values of the company form, as entered.
///
/// Starts out as an SAS doing dental practice (CIIU 8622).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInput {
    pub legal_name: String,
    pub tax_id: String,
    pub company_type: CompanyType,
    /// `YYYY-MM-DD`
    pub incorporation_date: String,
    pub legal_representative: LegalRepresentativeInput,
    pub contact: CompanyContactInput,
    pub economic_activity: String,
    pub activity_code: String,
}

impl Default for CompanyInput {
    fn default() -> Self {
        Self {
            legal_name: String::new(),
            tax_id: String::new(),
            company_type: CompanyType::Sas,
            incorporation_date: String::new(),
            legal_representative: LegalRepresentativeInput::default(),
            contact: CompanyContactInput::default(),
            economic_activity: "Práctica Odontológica".to_string(),
            activity_code: ActivityCode::DentalPractice.code().to_string(),
        }
    }
}

impl CompanyInput {
    fn validate_company(&self, today: NaiveDate, errors: &mut FieldErrors) {
        required(errors, "legal_name", &self.legal_name, "Razón social requerida");
        required_with(
            errors,
            "tax_id",
            &self.tax_id,
            "NIT requerido",
            is_valid_tax_id,
            "NIT inválido",
        );

        if let Some(date) = required_date(
            errors,
            "incorporation_date",
            &self.incorporation_date,
            "Fecha de constitución requerida",
        ) {
            if date > today {
                errors.add("incorporation_date", "La fecha no puede ser futura");
            }
        }
    }

    fn validate_representative(&self, errors: &mut FieldErrors) {
        let rep = &self.legal_representative;
        required(
            errors,
            "legal_representative.names",
            &rep.names,
            "Nombres del representante requeridos",
        );
        required(
            errors,
            "legal_representative.surnames",
            &rep.surnames,
            "Apellidos del representante requeridos",
        );
        let doc_type = rep.document_type;
        required_with(
            errors,
            "legal_representative.document_number",
            &rep.document_number,
            "Número de documento requerido",
            |v| is_valid_national_id_conditional(v, doc_type),
            "Número de cédula inválido",
        );
        required_with(
            errors,
            "legal_representative.phone",
            &rep.phone,
            "Teléfono del representante requerido",
            is_valid_phone,
            "Formato de teléfono inválido",
        );
        required_with(
            errors,
            "legal_representative.email",
            &rep.email,
            "Email del representante requerido",
            is_valid_email,
            "Email inválido",
        );
    }

    fn validate_contact(&self, errors: &mut FieldErrors) {
        let contact = &self.contact;
        required_with(
            errors,
            "contact.phone",
            &contact.phone,
            "Teléfono de la empresa requerido",
            is_valid_phone,
            "Formato de teléfono inválido",
        );
        required_with(
            errors,
            "contact.email",
            &contact.email,
            "Email de la empresa requerido",
            is_valid_email,
            "Email inválido",
        );
        required(errors, "contact.address", &contact.address, "Dirección requerida");
        required(errors, "contact.city", &contact.city, "Ciudad requerida");
        required(
            errors,
            "contact.department",
            &contact.department,
            "Departamento requerido",
        );
    }

    fn validate_activity(&self, errors: &mut FieldErrors) {
        required(
            errors,
            "economic_activity",
            &self.economic_activity,
            "Actividad económica requerida",
        );
        required_with(
            errors,
            "activity_code",
            &self.activity_code,
            "Código CIIU requerido",
            is_valid_activity_code,
            "Código CIIU debe ser válido para actividad odontológica",
        );
    }
}

impl FormSteps for CompanyInput {
    const STEPS: &'static [&'static str] = &[
        "Información de la Empresa",
        "Representante Legal",
        "Contacto y Ubicación",
        "Actividad Económica",
        "Validación Biométrica",
    ];

    fn validate_step(&self, step: usize, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            1 => self.validate_company(today, &mut errors),
            2 => self.validate_representative(&mut errors),
            3 => self.validate_contact(&mut errors),
            4 => self.validate_activity(&mut errors),
            _ => {}
        }
        errors
    }

    fn build(&self, meta: RecordMeta) -> Result<Registration, FieldErrors> {
        let incorporation_date = parse_date(&self.incorporation_date).ok_or_else(|| {
            let mut errors = FieldErrors::new();
            errors.add("incorporation_date", "Fecha inválida");
            errors
        })?;

        let rep = &self.legal_representative;
        let legal_representative = LegalRepresentative {
            names: rep.names.trim().to_string(),
            surnames: rep.surnames.trim().to_string(),
            document_type: rep.document_type,
            document_number: rep.document_number.trim().to_string(),
            phone: PhoneNumber::new(rep.phone.as_str())
                .map_err(field_error("legal_representative.phone"))?,
            email: EmailAddress::new(rep.email.as_str())
                .map_err(field_error("legal_representative.email"))?,
        };

        let contact = CompanyContact {
            phone: PhoneNumber::new(self.contact.phone.as_str())
                .map_err(field_error("contact.phone"))?,
            email: EmailAddress::new(self.contact.email.as_str())
                .map_err(field_error("contact.email"))?,
            address: self.contact.address.trim().to_string(),
            city: self.contact.city.trim().to_string(),
            department: self.contact.department.trim().to_string(),
        };

        let company = Company {
            id: meta.id,
            legal_name: self.legal_name.trim().to_string(),
            tax_id: TaxId::new(self.tax_id.as_str()).map_err(field_error("tax_id"))?,
            company_type: self.company_type,
            incorporation_date,
            legal_representative,
            contact,
            economic_activity: self.economic_activity.trim().to_string(),
            activity_code: self
                .activity_code
                .parse::<ActivityCode>()
                .map_err(field_error("activity_code"))?,
            biometric: meta.biometric,
            status: RegistrationStatus::Pending,
            sales_office: None,
            initial_fee: None,
            created_at: meta.created_at,
        };

        Ok(Registration::Company(company))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::CompanyForm;
    use crate::models::{BiometricData, BiometricKind};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn valid_input() -> CompanyInput {
        CompanyInput {
            legal_name: "Clínica Dental Sonrisas SAS".to_string(),
            tax_id: "900123456-6".to_string(),
            company_type: CompanyType::Sas,
            incorporation_date: "2015-03-20".to_string(),
            legal_representative: LegalRepresentativeInput {
                names: "Andrés".to_string(),
                surnames: "Rojas".to_string(),
                document_type: DocumentType::NationalId,
                document_number: "79123456".to_string(),
                phone: "+57 301 234 5678".to_string(),
                email: "andres.rojas@sonrisas.co".to_string(),
            },
            contact: CompanyContactInput {
                phone: "+57 320 987 6543".to_string(),
                email: "contacto@sonrisas.co".to_string(),
                address: "Calle 50 #10-20".to_string(),
                city: "Medellín".to_string(),
                department: "Antioquia".to_string(),
            },
            ..CompanyInput::default()
        }
    }

    #[test]
    fn test_defaults_match_dental_practice() {
        let input = CompanyInput::default();
        assert_eq!(input.activity_code, "8622");
        assert_eq!(input.company_type, CompanyType::Sas);
        assert!(input.validate_step(4, today()).is_empty());
    }

    #[test]
    fn test_valid_company_passes() {
        let form = CompanyForm::new(valid_input()).with_reference_date(today());
        assert!(form.validate_all().is_empty());
    }

    #[test]
    fn test_tax_id_check_digit_enforced() {
        let mut input = valid_input();
        input.tax_id = "900123456-7".to_string();
        assert_eq!(input.validate_step(1, today()).get("tax_id"), Some("NIT inválido"));
    }

    #[test]
    fn test_future_incorporation_date() {
        let mut input = valid_input();
        input.incorporation_date = "2025-06-02".to_string();
        assert_eq!(
            input.validate_step(1, today()).get("incorporation_date"),
            Some("La fecha no puede ser futura")
        );

        input.incorporation_date = "2025-06-01".to_string();
        assert!(input.validate_step(1, today()).is_empty());
    }

    #[test]
    fn test_representative_passport() {
        let mut input = valid_input();
        input.legal_representative.document_type = DocumentType::Passport;
        input.legal_representative.document_number = "PA998877".to_string();
        assert!(input.validate_step(2, today()).is_empty());
    }

    #[test]
    fn test_invalid_activity_code_is_the_only_error() {
        let mut input = valid_input();
        input.activity_code = "9999".to_string();
        let form = CompanyForm::new(input.clone()).with_reference_date(today());

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("activity_code"),
            Some("Código CIIU debe ser válido para actividad odontológica")
        );
        assert_eq!(form.input(), &input);
    }

    #[test]
    fn test_submit_attaches_biometric() {
        let mut form = CompanyForm::new(valid_input()).with_reference_date(today());
        form.attach_biometric(BiometricData::captured(BiometricKind::Face, "face_hash_42"));

        match form.submit().unwrap() {
            Registration::Company(company) => {
                assert_eq!(company.tax_id.check_digit(), 6);
                assert_eq!(company.activity_code, ActivityCode::DentalPractice);
                assert_eq!(company.biometric.unwrap().hash, "face_hash_42");
            }
            other => panic!("expected company, got {:?}", other),
        }
    }

    #[test]
    fn test_five_steps() {
        let mut form = CompanyForm::new(valid_input()).with_reference_date(today());
        assert_eq!(form.wizard().total(), 5);
        for expected in 2..=5 {
            assert_eq!(form.next_step(), Ok(expected));
        }
        assert!(form.wizard().is_last());
        assert_eq!(form.step_title(5), Some("Validación Biométrica"));
    }
}
