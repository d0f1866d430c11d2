//! Registration service layer.
//!
//! Submits completed forms and runs biometric captures, announcing
//! successful outcomes through the notification queue.

use super::CURRENT_USER;
use crate::biometric::{BiometricScanner, CaptureModal, CaptureOutcome};
use crate::error::CaptureResult;
use crate::forms::{CompanyForm, FieldErrors, FormSteps, NaturalPersonForm, RegistrationForm};
use crate::models::{BiometricKind, Registration, Severity};
use crate::notifications::NotificationQueue;
use crate::observability::PortalMetrics;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Registration service trait for business operations.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Submit a natural-person form.
    fn submit_natural(&self, form: &NaturalPersonForm) -> Result<Registration, FieldErrors>;

    /// Submit a company form.
    fn submit_company(&self, form: &CompanyForm) -> Result<Registration, FieldErrors>;

    /// Open a capture dialog for one biometric method.
    fn open_capture(&self, kind: BiometricKind) -> CaptureModal;

    /// Run a capture in `modal` and announce a verified identity.
    async fn capture_biometric(&self, modal: &CaptureModal) -> CaptureResult<CaptureOutcome>;
}

/// Default implementation of RegistrationService.
pub struct RegistrationServiceImpl {
    scanner: Arc<dyn BiometricScanner>,
    notifications: NotificationQueue,
    metrics: PortalMetrics,
}

impl RegistrationServiceImpl {
    pub fn new(
        scanner: Arc<dyn BiometricScanner>,
        notifications: NotificationQueue,
        metrics: PortalMetrics,
    ) -> Self {
        Self {
            scanner,
            notifications,
            metrics,
        }
    }

    fn submit<I: FormSteps>(
        &self,
        form: &RegistrationForm<I>,
        kind: &str,
    ) -> Result<Registration, FieldErrors> {
        let result = form.submit();
        let error_count = result.as_ref().err().map_or(0, FieldErrors::len);
        self.metrics.track_submission(kind, error_count);

        let registration = result?;
        let (title, message) = match &registration {
            Registration::Natural(person) => (
                "¡Registro exitoso!",
                format!(
                    "{}, tu registro ha sido completado y está en proceso de validación.",
                    person.full_name()
                ),
            ),
            Registration::Company(company) => (
                "¡Registro empresarial exitoso!",
                format!(
                    "{} ha sido registrada exitosamente y está en proceso de validación.",
                    company.legal_name
                ),
            ),
        };

        info!(id = registration.id(), kind = kind, "Registration accepted");
        self.notifications
            .enqueue(CURRENT_USER, title, message, Severity::Success);

        Ok(registration)
    }
}

#[async_trait]
impl RegistrationService for RegistrationServiceImpl {
    fn submit_natural(&self, form: &NaturalPersonForm) -> Result<Registration, FieldErrors> {
        self.submit(form, "natural")
    }

    fn submit_company(&self, form: &CompanyForm) -> Result<Registration, FieldErrors> {
        self.submit(form, "company")
    }

    fn open_capture(&self, kind: BiometricKind) -> CaptureModal {
        CaptureModal::new(kind, self.scanner.clone())
    }

    async fn capture_biometric(&self, modal: &CaptureModal) -> CaptureResult<CaptureOutcome> {
        let outcome = modal.capture().await?;
        self.metrics
            .track_capture(modal.kind().as_str(), outcome.is_success());

        if outcome.is_success() {
            self.notifications.enqueue(
                CURRENT_USER,
                "Validación biométrica exitosa",
                "La identidad ha sido verificada correctamente",
                Severity::Success,
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biometric::{CaptureProfile, SimulatedScanner};
    use crate::forms::NaturalPersonInput;
    use std::time::Duration;

    fn service(rate: f64) -> (RegistrationServiceImpl, NotificationQueue, PortalMetrics) {
        let profile = CaptureProfile {
            latency: Duration::from_millis(5),
            success_rate: rate,
        };
        let scanner = SimulatedScanner::new(profile, profile, Duration::from_millis(5));
        let queue = NotificationQueue::new(Duration::from_secs(5));
        let metrics = PortalMetrics::new();
        let service = RegistrationServiceImpl::new(Arc::new(scanner), queue.clone(), metrics.clone());
        (service, queue, metrics)
    }

    #[test]
    fn test_rejected_submission_is_silent() {
        let (service, queue, metrics) = service(1.0);
        let form = NaturalPersonForm::new(NaturalPersonInput::default());

        assert!(service.submit_natural(&form).is_err());
        assert!(queue.is_empty());
        assert_eq!(metrics.submissions_rejected_total(), 1);
    }

    #[tokio::test]
    async fn test_successful_capture_notifies() {
        let (service, queue, metrics) = service(1.0);
        let modal = service.open_capture(BiometricKind::Face);

        let outcome = service.capture_biometric(&modal).await.unwrap();
        assert!(outcome.is_success());
        assert_eq!(queue.list()[0].title, "Validación biométrica exitosa");
        assert_eq!(metrics.captures_total(), 1);
        assert!(modal.captured_data().is_some());
    }

    #[tokio::test]
    async fn test_failed_capture_stays_local() {
        let (service, queue, metrics) = service(0.0);
        let modal = service.open_capture(BiometricKind::Fingerprint);

        let outcome = service.capture_biometric(&modal).await.unwrap();
        assert!(!outcome.is_success());
        assert!(queue.is_empty());
        assert_eq!(metrics.capture_failures_total(), 1);
    }
}
