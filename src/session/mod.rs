//! Explicit session context.
//!
//! There is no ambient current-user state: a [`SessionStore`] is created,
//! passed to whatever needs it, and destroyed on shutdown. The signed-in
//! user is snapshotted into a key-value [`SessionStorage`] under one fixed
//! key, overwritten on login and removed on logout.

pub mod auth;
pub mod storage;
pub mod store;

pub use auth::{Authenticator, MockAuthenticator};
pub use storage::{InMemoryStorage, SessionStorage};
pub use store::{Access, SessionStore};
