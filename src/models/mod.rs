//! Data models for registrants, users and notifications.
//!
//! This module contains the records produced by the registration forms,
//! the signed-in user shape, notification entries and the static catalogs
//! the forms offer.

pub mod catalog;
pub mod notification;
pub mod registration;
pub mod user;

pub use catalog::{
    generate_user_id, SalesOffice, COLOMBIAN_CITIES, COLOMBIAN_DEPARTMENTS, DENTAL_PROFESSIONS,
};
pub use notification::{Notification, Severity};
pub use registration::{
    BiometricData, BiometricKind, Company, CompanyContact, CompanyType, Gender,
    LegalRepresentative, NaturalPerson, RegistrantKind, Registration, RegistrationStatus,
};
pub use user::{Role, User};
