//! Multi-step registration forms.
//!
//! Each form holds the raw field values exactly as entered, a linear
//! [`Wizard`] over its steps and a per-step gate built from the
//! [`crate::validation`] rules. A step only advances when its gate passes;
//! submission re-checks every step and never clears entered values.

pub mod company;
pub mod errors;
pub mod fields;
pub mod natural;
pub mod wizard;

pub use company::{CompanyContactInput, CompanyInput, LegalRepresentativeInput};
pub use errors::{FieldError, FieldErrors};
pub use natural::NaturalPersonInput;
pub use wizard::{FormSteps, RecordMeta, RegistrationForm, Wizard};

/// Convenience alias for the natural-person wizard.
pub type NaturalPersonForm = RegistrationForm<NaturalPersonInput>;

/// Convenience alias for the company wizard.
pub type CompanyForm = RegistrationForm<CompanyInput>;
