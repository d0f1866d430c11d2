//! One-capture-at-a-time driver for the biometric dialog.

use super::scanner::{BiometricScanner, CaptureOutcome};
use crate::error::{CaptureError, CaptureResult};
use crate::models::{BiometricData, BiometricKind};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};

const SCAN_ERROR: &str = "Error durante el escaneo. Intente nuevamente.";

/// Observable state of the capture dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// No capture started yet
    #[default]
    Idle,
    Pending,
    Succeeded { token: String },
    Failed { reason: String },
}

impl CaptureState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<CaptureOutcome> for CaptureState {
    fn from(outcome: CaptureOutcome) -> Self {
        match outcome {
            CaptureOutcome::Succeeded { token } => Self::Succeeded { token },
            CaptureOutcome::Failed { reason } => Self::Failed { reason },
        }
    }
}

/// Moves a capture that never reported an outcome from `Pending` to `Failed`.
///
/// Dropped when the capture task ends, including by panic or cancellation.
struct PendingGuard {
    state: Arc<Mutex<CaptureState>>,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        if state.is_pending() {
            warn!("Biometric capture ended without an outcome");
            *state = CaptureState::Failed {
                reason: SCAN_ERROR.to_string(),
            };
        }
    }
}

/// Handle to a running capture.
///
/// Dropping the handle does not stop the capture; it always runs to
/// completion and updates the dialog state.
#[derive(Debug)]
pub struct CaptureHandle {
    task: JoinHandle<CaptureOutcome>,
}

impl CaptureHandle {
    pub async fn outcome(self) -> CaptureResult<CaptureOutcome> {
        self.task
            .await
            .map_err(|e| CaptureError::TaskFailed(e.to_string()))
    }
}

/// A capture dialog for one biometric method.
///
/// While a capture is pending the trigger is disabled: a second `start`
/// fails with [`CaptureError::AlreadyPending`]. After a failure the user may
/// start again; nothing retries automatically.
#[derive(Clone)]
pub struct CaptureModal {
    kind: BiometricKind,
    scanner: Arc<dyn BiometricScanner>,
    state: Arc<Mutex<CaptureState>>,
}

impl CaptureModal {
    pub fn new(kind: BiometricKind, scanner: Arc<dyn BiometricScanner>) -> Self {
        Self {
            kind,
            scanner,
            state: Arc::new(Mutex::new(CaptureState::Idle)),
        }
    }

    pub fn kind(&self) -> BiometricKind {
        self.kind
    }

    pub fn state(&self) -> CaptureState {
        self.state
            .lock()
            .map(|s| s.clone())
            .unwrap_or(CaptureState::Idle)
    }

    /// Whether the start control is enabled.
    pub fn can_start(&self) -> bool {
        !self.state().is_pending()
    }

    /// Start a capture on the current tokio runtime.
    pub fn start(&self) -> CaptureResult<CaptureHandle> {
        {
            let mut state = self
                .state
                .lock()
                .map_err(|e| CaptureError::TaskFailed(e.to_string()))?;
            if state.is_pending() {
                return Err(CaptureError::AlreadyPending);
            }
            *state = CaptureState::Pending;
        }

        info!(kind = self.kind.as_str(), "Biometric capture started");

        let scanner = self.scanner.clone();
        let state = self.state.clone();
        let kind = self.kind;
        let task = tokio::spawn(async move {
            let _guard = PendingGuard {
                state: state.clone(),
            };
            let outcome = scanner.capture(kind).await;
            if let Ok(mut current) = state.lock() {
                *current = CaptureState::from(outcome.clone());
            }
            outcome
        });

        Ok(CaptureHandle { task })
    }

    /// Start a capture and wait for its outcome.
    pub async fn capture(&self) -> CaptureResult<CaptureOutcome> {
        self.start()?.outcome().await
    }

    /// Biometric data to attach to a registration, once a capture succeeded.
    pub fn captured_data(&self) -> Option<BiometricData> {
        match self.state() {
            CaptureState::Succeeded { token } => Some(BiometricData::captured(self.kind, token)),
            _ => None,
        }
    }

    /// Return to `Idle`, as when the dialog is reopened. Ignored while pending.
    pub fn reset(&self) {
        if let Ok(mut state) = self.state.lock() {
            if !state.is_pending() {
                *state = CaptureState::Idle;
            }
        }
    }
}

impl std::fmt::Debug for CaptureModal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureModal")
            .field("kind", &self.kind)
            .field("state", &self.state())
            .finish()
    }
}
