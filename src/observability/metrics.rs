//! Portal metrics tracking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Counters shared by every clone of the tracker.
#[derive(Debug, Clone)]
pub struct PortalMetrics {
    logins_total: Arc<AtomicU64>,
    login_failures_total: Arc<AtomicU64>,
    captures_total: Arc<AtomicU64>,
    capture_failures_total: Arc<AtomicU64>,
    submissions_total: Arc<AtomicU64>,
    submissions_rejected_total: Arc<AtomicU64>,
}

impl PortalMetrics {
    pub fn new() -> Self {
        Self {
            logins_total: Arc::new(AtomicU64::new(0)),
            login_failures_total: Arc::new(AtomicU64::new(0)),
            captures_total: Arc::new(AtomicU64::new(0)),
            capture_failures_total: Arc::new(AtomicU64::new(0)),
            submissions_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a sign-in attempt.
    pub fn track_login(&self, duration_ms: u128, success: bool) {
        self.logins_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.login_failures_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(duration_ms = duration_ms, success = success, "Login attempt completed");
    }

    /// Track a biometric capture.
    pub fn track_capture(&self, kind: &str, success: bool) {
        self.captures_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.capture_failures_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(kind = %kind, success = success, "Biometric capture tracked");
    }

    /// Track a registration submission and how many fields blocked it.
    pub fn track_submission(&self, kind: &str, error_count: usize) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);

        if error_count > 0 {
            self.submissions_rejected_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::info!(kind = %kind, error_count = error_count, "Registration submitted");
    }

    pub fn logins_total(&self) -> u64 {
        self.logins_total.load(Ordering::Relaxed)
    }

    pub fn login_failures_total(&self) -> u64 {
        self.login_failures_total.load(Ordering::Relaxed)
    }

    pub fn captures_total(&self) -> u64 {
        self.captures_total.load(Ordering::Relaxed)
    }

    pub fn capture_failures_total(&self) -> u64 {
        self.capture_failures_total.load(Ordering::Relaxed)
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected_total(&self) -> u64 {
        self.submissions_rejected_total.load(Ordering::Relaxed)
    }

    /// Get the capture success rate (0.0 to 1.0).
    pub fn capture_success_rate(&self) -> f64 {
        let total = self.captures_total() as f64;
        if total == 0.0 {
            return 0.0;
        }
        (self.captures_total() - self.capture_failures_total()) as f64 / total
    }

    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Logins: {} ({} failed)\n\
             Biometric Captures: {} ({:.2}% success)\n\
             Submissions: {} ({} rejected)",
            self.logins_total(),
            self.login_failures_total(),
            self.captures_total(),
            self.capture_success_rate() * 100.0,
            self.submissions_total(),
            self.submissions_rejected_total(),
        )
    }
}

impl Default for PortalMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}
