//! Domain value objects and types.
//!
//! Type-safe wrappers for the identifiers a registration carries: national
//! IDs, NITs, email addresses, phone numbers, CIIU codes and ReTHUS numbers.
//! Each is validated at construction time through [`crate::validation`], so
//! an accepted registration cannot hold a malformed value.

pub mod activity;
pub mod email;
pub mod errors;
pub mod identity;
pub mod phone;
pub mod tax_id;

pub use activity::{ActivityCode, ProfessionalRegistry};
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use identity::{DocumentType, NationalId};
pub use phone::PhoneNumber;
pub use tax_id::TaxId;
