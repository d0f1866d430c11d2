//! Observability for the registration flows.
//!
//! Counters for sign-ins, biometric captures and form submissions, with
//! structured `tracing` events alongside.

pub mod metrics;

pub use metrics::{PortalMetrics, Timer};
