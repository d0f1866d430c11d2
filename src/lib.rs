//! Dental Registry - registration core for a dental-sector portal.
//!
//! This library validates and records the registration of dental
//! professionals and dental companies in Colombia, behind a mock sign-in
//! layer and a local notification queue.
//!
//! # Architecture
//!
//! - **validation**: Pure field predicates, including the NIT check digit
//! - **domain**: Value objects that can only hold validated values
//! - **models**: Registration records, users, notifications and catalogs
//! - **forms**: Multi-step wizards with per-step field gates
//! - **session**: Explicit session store over pluggable storage and auth
//! - **notifications**: Shared queue with auto-expiring entries
//! - **biometric**: Simulated fingerprint and face capture
//! - **services**: Flows that report their outcome as notifications
//! - **observability**: Counters for logins, captures and submissions
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod biometric;
pub mod config;
pub mod domain;
pub mod error;
pub mod forms;
pub mod models;
pub mod notifications;
pub mod observability;
pub mod session;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use biometric::{BiometricScanner, CaptureModal, CaptureOutcome, CaptureState, SimulatedScanner};
pub use config::Config;
pub use domain::{DocumentType, ValidationError};
pub use error::{AuthError, CaptureError, ConfigError, SessionError};
pub use forms::{CompanyForm, CompanyInput, FieldErrors, NaturalPersonForm, NaturalPersonInput};
pub use models::{Notification, Registration, Role, Severity, User};
pub use notifications::NotificationQueue;
pub use observability::PortalMetrics;
pub use services::{AuthService, AuthServiceImpl, RegistrationService, RegistrationServiceImpl};
pub use session::{Access, InMemoryStorage, MockAuthenticator, SessionStore};
pub use validation::{
    is_valid_activity_code, is_valid_email, is_valid_national_id,
    is_valid_national_id_conditional, is_valid_phone, is_valid_professional_registry,
    is_valid_tax_id,
};
