//! Notifications shown to the current user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a notification. `Info` and `Success` expire on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Whether entries of this severity are removed after the configured delay.
    pub fn auto_expires(&self) -> bool {
        matches!(self, Self::Info | Self::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
