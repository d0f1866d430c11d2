//! Simulated biometric capture.
//!
//! There is no hardware behind this module: [`SimulatedScanner`] resolves
//! each capture after a fixed latency with a fixed success probability.
//! [`CaptureModal`] drives one capture at a time the way the capture dialog
//! does, exposing pending, succeeded and failed states.

pub mod modal;
pub mod scanner;

pub use modal::{CaptureHandle, CaptureModal, CaptureState};
pub use scanner::{BiometricScanner, CaptureOutcome, CaptureProfile, SimulatedScanner};
