//! Session store with explicit lifecycle.

use super::auth::Authenticator;
use super::storage::SessionStorage;
use crate::config::Config;
use crate::error::{AuthResult, SessionResult};
use crate::models::{Role, User};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Outcome of checking the session against a protected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Nobody is signed in; send the user to the login page
    Unauthenticated,
    /// Signed in, but without the required role
    Forbidden,
}

/// The signed-in user for one portal instance.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    authenticator: Arc<dyn Authenticator>,
    key: String,
    user: RwLock<Option<User>>,
}

impl SessionStore {
    /// Create a session, restoring a previously stored snapshot if present.
    ///
    /// A snapshot that no longer decodes is discarded rather than failing
    /// creation.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage itself fails.
    pub fn create(
        storage: Arc<dyn SessionStorage>,
        authenticator: Arc<dyn Authenticator>,
        key: impl Into<String>,
    ) -> SessionResult<Self> {
        let key = key.into();

        let restored = match storage.get(&key)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(user_id = %user.id, "Restored session snapshot");
                    Some(user)
                }
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable session snapshot");
                    storage.remove(&key)?;
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            storage,
            authenticator,
            key,
            user: RwLock::new(restored),
        })
    }

    /// Create a session under the key from `config`.
    pub fn from_config(
        storage: Arc<dyn SessionStorage>,
        authenticator: Arc<dyn Authenticator>,
        config: &Config,
    ) -> SessionResult<Self> {
        Self::create(storage, authenticator, config.session_key.as_str())
    }

    /// Tear down this session context.
    ///
    /// The stored snapshot is left in place so a later [`SessionStore::create`]
    /// resumes it; call [`SessionStore::logout`] first to end the session.
    pub fn destroy(self) {
        debug!(key = %self.key, "Session context destroyed");
    }

    /// Authenticate and, on success, replace the stored snapshot wholesale.
    ///
    /// Returns `Ok(false)` when the credentials are rejected.
    pub async fn login(&self, identifier: &str, secret: &str) -> AuthResult<bool> {
        let Some(user) = self.authenticator.authenticate(identifier, secret).await? else {
            debug!("Credentials rejected");
            return Ok(false);
        };

        let snapshot = serde_json::to_string(&user).map_err(crate::error::SessionError::from)?;
        self.storage.set(&self.key, snapshot)?;

        info!(user_id = %user.id, role = %user.role, "User signed in");
        if let Ok(mut current) = self.user.write() {
            *current = Some(user);
        }

        Ok(true)
    }

    /// Remove the stored snapshot, then forget the current user.
    ///
    /// If storage fails the user stays signed in, matching what a reload
    /// would restore.
    pub fn logout(&self) -> SessionResult<()> {
        self.storage.remove(&self.key)?;
        if let Ok(mut current) = self.user.write() {
            *current = None;
        }
        info!("User signed out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().map(|u| u.is_some()).unwrap_or(false)
    }

    pub fn current_user(&self) -> Option<User> {
        self.user.read().ok().and_then(|u| u.clone())
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user
            .read()
            .map(|u| u.as_ref().is_some_and(|user| user.role == role))
            .unwrap_or(false)
    }

    /// Check access to an area that optionally requires a specific role.
    pub fn require(&self, required: Option<Role>) -> Access {
        if !self.is_authenticated() {
            return Access::Unauthenticated;
        }
        match required {
            Some(role) if !self.has_role(role) => Access::Forbidden,
            _ => Access::Granted,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.key)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
