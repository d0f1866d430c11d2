//! Test doubles for the session and biometric seams.

#![allow(unused_imports)]

mod mock_authenticator;
mod mock_scanner;
mod mock_storage;

pub use mock_authenticator::FailingAuthenticator;
pub use mock_scanner::{PanickingScanner, ScriptedScanner};
pub use mock_storage::FlakyStorage;
