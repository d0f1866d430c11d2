//! Application service layer.
//!
//! Services orchestrate the session, forms and biometric capture and surface
//! their outcomes through the shared notification queue, so any part of the
//! portal can observe them.

mod auth_service;
mod registration_service;

pub use auth_service::{AuthService, AuthServiceImpl};
pub use registration_service::{RegistrationService, RegistrationServiceImpl};

/// Recipient used for notifications raised before a user is known.
pub const CURRENT_USER: &str = "current";
