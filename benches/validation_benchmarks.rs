//! Performance benchmarks for the validation rule set.
//!
//! These benchmarks measure:
//! - NIT check digit over valid, invalid and malformed input
//! - The regex-backed predicates (email, phone, ReTHUS)
//! - A full company form validation pass

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dental_registry::forms::{CompanyContactInput, CompanyForm, CompanyInput, LegalRepresentativeInput};
use dental_registry::validation::{
    is_valid_email, is_valid_national_id, is_valid_phone, is_valid_professional_registry,
    is_valid_tax_id,
};

fn bench_tax_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("tax_id");

    for (label, value) in [
        ("valid", "900123456-6"),
        ("wrong_digit", "900123456-7"),
        ("wrong_length", "900123456"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), value, |b, value| {
            b.iter(|| is_valid_tax_id(black_box(value)));
        });
    }

    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    c.bench_function("national_id", |b| {
        b.iter(|| is_valid_national_id(black_box("1020304050")))
    });
    c.bench_function("email", |b| {
        b.iter(|| is_valid_email(black_box("consultorio.norte@sonrisas.com.co")))
    });
    c.bench_function("phone", |b| {
        b.iter(|| is_valid_phone(black_box("+57 300 123 4567")))
    });
    c.bench_function("professional_registry", |b| {
        b.iter(|| is_valid_professional_registry(black_box("rth12345678")))
    });
}

fn bench_company_form(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
    let input = CompanyInput {
        legal_name: "Clínica Dental Sonrisas SAS".to_string(),
        tax_id: "900123456-6".to_string(),
        incorporation_date: "2015-03-20".to_string(),
        legal_representative: LegalRepresentativeInput {
            names: "Andrés".to_string(),
            surnames: "Rojas".to_string(),
            document_number: "79123456".to_string(),
            phone: "+57 301 234 5678".to_string(),
            email: "andres.rojas@sonrisas.co".to_string(),
            ..Default::default()
        },
        contact: CompanyContactInput {
            phone: "+57 320 987 6543".to_string(),
            email: "contacto@sonrisas.co".to_string(),
            address: "Calle 50 #10-20".to_string(),
            city: "Medellín".to_string(),
            department: "Antioquia".to_string(),
        },
        ..CompanyInput::default()
    };
    let form = CompanyForm::new(input).with_reference_date(today);

    c.bench_function("company_validate_all", |b| {
        b.iter(|| black_box(&form).validate_all())
    });
}

criterion_group!(benches, bench_tax_id, bench_patterns, bench_company_form);
criterion_main!(benches);
