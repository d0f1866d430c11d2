//! Sample registration inputs shared by the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use dental_registry::domain::DocumentType;
use dental_registry::forms::{
    CompanyContactInput, CompanyInput, LegalRepresentativeInput, NaturalPersonInput,
};
use dental_registry::models::{CompanyType, Gender};

/// Fixed "today" so age and incorporation-date rules are deterministic.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// A natural-person input that passes every step.
pub fn sample_dentist() -> NaturalPersonInput {
    NaturalPersonInput {
        document_type: DocumentType::NationalId,
        document_number: "52987654".to_string(),
        names: "María José".to_string(),
        surnames: "Castro Díaz".to_string(),
        birth_date: "1985-11-30".to_string(),
        gender: Gender::Female,
        phone: "+57 315 222 3344".to_string(),
        email: "mj.castro@example.com".to_string(),
        address: "Avenida 6N #23-15".to_string(),
        city: "Cali".to_string(),
        department: "Valle del Cauca".to_string(),
        profession: "Periodoncista".to_string(),
        specialization: "Implantología".to_string(),
        professional_registry: "rth987654".to_string(),
    }
}

/// A company input that passes every step.
pub fn sample_clinic() -> CompanyInput {
    CompanyInput {
        legal_name: "Odontología Integral del Caribe LTDA".to_string(),
        tax_id: "860034313-0".to_string(),
        company_type: CompanyType::Ltda,
        incorporation_date: "2009-08-14".to_string(),
        legal_representative: LegalRepresentativeInput {
            names: "Carlos".to_string(),
            surnames: "Mendoza".to_string(),
            document_type: DocumentType::NationalId,
            document_number: "72123456".to_string(),
            phone: "+57 300 111 2233".to_string(),
            email: "carlos.mendoza@caribedental.co".to_string(),
        },
        contact: CompanyContactInput {
            phone: "573004445566".to_string(),
            email: "info@caribedental.co".to_string(),
            address: "Carrera 54 #72-80".to_string(),
            city: "Barranquilla".to_string(),
            department: "Atlántico".to_string(),
        },
        ..CompanyInput::default()
    }
}
