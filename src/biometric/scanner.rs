//! Scanner abstraction and the simulated implementation.

use crate::config::Config;
use crate::models::BiometricKind;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const FINGERPRINT_FAILURE: &str =
    "No se pudo detectar la huella. Asegúrese de colocar el dedo correctamente.";
const FACE_FAILURE: &str =
    "No se pudo reconocer el rostro. Asegúrese de que su cara esté bien iluminada.";

/// Result of one capture attempt. Failure is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaptureOutcome {
    Succeeded { token: String },
    Failed { reason: String },
}

impl CaptureOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Succeeded { token } => Some(token),
            Self::Failed { .. } => None,
        }
    }
}

/// Source of biometric captures.
#[async_trait]
pub trait BiometricScanner: Send + Sync {
    /// Whether the device can capture at all.
    async fn is_available(&self) -> bool;

    async fn capture_fingerprint(&self) -> CaptureOutcome;

    async fn capture_face(&self) -> CaptureOutcome;

    async fn capture(&self, kind: BiometricKind) -> CaptureOutcome {
        match kind {
            BiometricKind::Fingerprint => self.capture_fingerprint().await,
            BiometricKind::Face => self.capture_face().await,
        }
    }

    /// Compare a stored token with a fresh capture.
    async fn verify(&self, stored: &str, current: &str) -> bool;
}

/// Latency and success probability of one simulated capture method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureProfile {
    pub latency: Duration,
    /// Probability in [0, 1] that a capture succeeds
    pub success_rate: f64,
}

/// Scanner that sleeps for a fixed latency and succeeds at random.
#[derive(Debug, Clone)]
pub struct SimulatedScanner {
    fingerprint: CaptureProfile,
    face: CaptureProfile,
    verify_latency: Duration,
}

impl SimulatedScanner {
    pub fn new(fingerprint: CaptureProfile, face: CaptureProfile, verify_latency: Duration) -> Self {
        Self {
            fingerprint,
            face,
            verify_latency,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CaptureProfile {
                latency: Duration::from_millis(config.fingerprint_latency_ms),
                success_rate: config.fingerprint_success_rate,
            },
            CaptureProfile {
                latency: Duration::from_millis(config.face_latency_ms),
                success_rate: config.face_success_rate,
            },
            Duration::from_millis(config.verify_latency_ms),
        )
    }

    async fn simulate(&self, kind: BiometricKind) -> CaptureOutcome {
        let (profile, failure) = match kind {
            BiometricKind::Fingerprint => (self.fingerprint, FINGERPRINT_FAILURE),
            BiometricKind::Face => (self.face, FACE_FAILURE),
        };

        tokio::time::sleep(profile.latency).await;

        let roll: f64 = rand::random();
        let outcome = if roll < profile.success_rate {
            CaptureOutcome::Succeeded {
                token: format!("{}_hash_{}", kind.as_str(), Utc::now().timestamp_millis()),
            }
        } else {
            CaptureOutcome::Failed {
                reason: failure.to_string(),
            }
        };

        debug!(kind = kind.as_str(), success = outcome.is_success(), "Simulated capture finished");
        outcome
    }
}

impl Default for SimulatedScanner {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[async_trait]
impl BiometricScanner for SimulatedScanner {
    async fn is_available(&self) -> bool {
        true
    }

    async fn capture_fingerprint(&self) -> CaptureOutcome {
        self.simulate(BiometricKind::Fingerprint).await
    }

    async fn capture_face(&self) -> CaptureOutcome {
        self.simulate(BiometricKind::Face).await
    }

    async fn verify(&self, stored: &str, current: &str) -> bool {
        tokio::time::sleep(self.verify_latency).await;
        stored.contains("hash") && current.contains("hash")
    }
}
