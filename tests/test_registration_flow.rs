//! End-to-end registration flows: wizard, capture, submission and the
//! notifications they raise.

mod fixtures;
mod mocks;

use dental_registry::biometric::CaptureState;
use dental_registry::forms::{CompanyForm, NaturalPersonForm};
use dental_registry::models::{BiometricKind, RegistrationStatus, Severity};
use dental_registry::services::{RegistrationService, RegistrationServiceImpl};
use dental_registry::{NotificationQueue, PortalMetrics, Registration};
use fixtures::{reference_date, sample_clinic, sample_dentist};
use mocks::ScriptedScanner;
use std::sync::Arc;
use std::time::Duration;

fn service(scanner: &ScriptedScanner) -> (RegistrationServiceImpl, NotificationQueue, PortalMetrics) {
    let queue = NotificationQueue::new(Duration::from_secs(5));
    let metrics = PortalMetrics::new();
    let service = RegistrationServiceImpl::new(
        Arc::new(scanner.clone()),
        queue.clone(),
        metrics.clone(),
    );
    (service, queue, metrics)
}

#[test]
fn test_invalid_activity_code_blocks_submission() {
    let scanner = ScriptedScanner::new(Duration::ZERO);
    let (service, queue, metrics) = service(&scanner);

    let mut input = sample_clinic();
    input.activity_code = "9999".to_string();
    let form = CompanyForm::new(input.clone()).with_reference_date(reference_date());

    let errors = service.submit_company(&form).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.fields(), vec!["activity_code"]);

    // nothing the user typed was lost
    assert_eq!(form.input(), &input);
    assert!(queue.is_empty());
    assert_eq!(metrics.submissions_rejected_total(), 1);
}

#[test]
fn test_company_wizard_walks_all_steps() {
    let mut form = CompanyForm::new(sample_clinic()).with_reference_date(reference_date());

    for expected in 2..=5 {
        assert_eq!(form.next_step(), Ok(expected));
    }
    assert!(form.wizard().is_last());
    assert_eq!(form.step_title(5), Some("Validación Biométrica"));
}

#[test]
fn test_wizard_stops_at_failing_step() {
    let mut input = sample_clinic();
    input.legal_representative.email = "carlos.mendoza".to_string();
    let mut form = CompanyForm::new(input).with_reference_date(reference_date());

    assert_eq!(form.next_step(), Ok(2));
    let errors = form.next_step().unwrap_err();
    assert_eq!(errors.fields(), vec!["legal_representative.email"]);
    assert_eq!(form.current_step(), 2);
}

#[test]
fn test_company_submission_notifies() {
    let scanner = ScriptedScanner::new(Duration::ZERO);
    let (service, queue, _) = service(&scanner);
    let form = CompanyForm::new(sample_clinic()).with_reference_date(reference_date());

    let registration = service.submit_company(&form).unwrap();
    let Registration::Company(company) = &registration else {
        panic!("expected company, got {:?}", registration);
    };
    assert_eq!(company.tax_id.check_digit(), 0);
    assert_eq!(company.activity_code.code(), "8622");
    assert_eq!(company.status, RegistrationStatus::Pending);

    let notifications = queue.list();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "¡Registro empresarial exitoso!");
    assert!(notifications[0]
        .message
        .starts_with("Odontología Integral del Caribe LTDA"));
    assert_eq!(notifications[0].severity, Severity::Success);
}

#[tokio::test]
async fn test_natural_flow_with_retry_after_failed_capture() {
    let scanner = ScriptedScanner::new(Duration::from_millis(5));
    scanner.push_failure("No se pudo leer la huella dactilar. Intente nuevamente.");
    scanner.push_success("fingerprint_hash_1700000000000");
    let (service, queue, metrics) = service(&scanner);

    let mut form = NaturalPersonForm::new(sample_dentist()).with_reference_date(reference_date());
    while !form.wizard().is_last() {
        form.next_step().unwrap();
    }

    let modal = service.open_capture(BiometricKind::Fingerprint);
    let first = service.capture_biometric(&modal).await.unwrap();
    assert!(!first.is_success());
    assert!(matches!(modal.state(), CaptureState::Failed { .. }));
    assert!(modal.captured_data().is_none());

    // manual retry
    let second = service.capture_biometric(&modal).await.unwrap();
    assert_eq!(second.token(), Some("fingerprint_hash_1700000000000"));

    let data = modal.captured_data().unwrap();
    form.attach_biometric(data);
    let registration = service.submit_natural(&form).unwrap();

    let biometric = registration.biometric().unwrap();
    assert_eq!(biometric.kind, BiometricKind::Fingerprint);
    assert_eq!(biometric.hash, "fingerprint_hash_1700000000000");
    assert!(biometric.validated);

    let titles: Vec<String> = queue.list().into_iter().map(|n| n.title).collect();
    assert_eq!(
        titles,
        vec!["¡Registro exitoso!", "Validación biométrica exitosa"]
    );
    assert_eq!(metrics.captures_total(), 2);
    assert_eq!(metrics.capture_failures_total(), 1);
    assert_eq!(scanner.get_call_count("capture_fingerprint"), 2);
}

#[test]
fn test_natural_record_is_tagged() {
    let form = NaturalPersonForm::new(sample_dentist()).with_reference_date(reference_date());
    let registration = form.submit().unwrap();

    let json = serde_json::to_value(&registration).unwrap();
    assert_eq!(json["kind"], "natural");
    assert_eq!(json["professional_registry"], "RTH987654");
    assert_eq!(json["email"], "mj.castro@example.com");

    let back: Registration = serde_json::from_value(json).unwrap();
    assert_eq!(back, registration);
}

#[test]
fn test_failed_submission_keeps_values_and_lists_every_step() {
    let mut input = sample_dentist();
    input.document_number = "12a4567".to_string();
    input.phone = "3001234567".to_string();
    input.professional_registry = "RTH1".to_string();
    let form = NaturalPersonForm::new(input.clone()).with_reference_date(reference_date());

    let errors = form.submit().unwrap_err();
    assert_eq!(
        errors.fields(),
        vec!["document_number", "phone", "professional_registry"]
    );
    assert_eq!(form.input(), &input);
}
