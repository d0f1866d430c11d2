//! Error types for the dental registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures are not errors here: the rule set returns `bool`
//! and forms collect messages in [`crate::forms::FieldErrors`].

use thiserror::Error;

/// Errors that can occur while authenticating.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The identity provider could not be reached or misbehaved
    #[error("Authentication backend unavailable: {0}")]
    Unavailable(String),

    /// Session snapshot could not be stored or read
    #[error("Session storage error: {0}")]
    Storage(#[from] SessionError),

    /// Generic authentication error with context
    #[error("Authentication error: {0}")]
    Other(String),
}

/// Errors that can occur while persisting the session snapshot.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Snapshot could not be encoded or decoded
    #[error("Session snapshot is not valid JSON: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Underlying key-value storage failed
    #[error("Session storage unavailable: {0}")]
    Storage(String),
}

/// Errors that can occur while driving a biometric capture.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// A capture is already in flight for this dialog
    #[error("A biometric capture is already in progress")]
    AlreadyPending,

    /// The capture task stopped before reporting an outcome
    #[error("Biometric capture task failed: {0}")]
    TaskFailed(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with AuthError
pub type AuthResult<T> = Result<T, AuthError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

/// Convenience type alias for Results with CaptureError
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
