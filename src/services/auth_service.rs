//! Sign-in service.
//!
//! Wraps the session store so that every login outcome, including backend
//! failures, ends up as a notification instead of an error.

use super::CURRENT_USER;
use crate::error::SessionResult;
use crate::models::Severity;
use crate::notifications::NotificationQueue;
use crate::observability::{PortalMetrics, Timer};
use crate::session::SessionStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Auth service trait for business operations.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in and report the outcome as a notification.
    ///
    /// Never fails: rejected credentials and backend errors both return
    /// `false` with an error notification.
    async fn login(&self, identifier: &str, secret: &str) -> bool;

    /// Sign out and drop the stored session.
    fn logout(&self) -> SessionResult<()>;
}

/// Default implementation of AuthService.
pub struct AuthServiceImpl {
    session: Arc<SessionStore>,
    notifications: NotificationQueue,
    metrics: PortalMetrics,
}

impl AuthServiceImpl {
    pub fn new(
        session: Arc<SessionStore>,
        notifications: NotificationQueue,
        metrics: PortalMetrics,
    ) -> Self {
        Self {
            session,
            notifications,
            metrics,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, identifier: &str, secret: &str) -> bool {
        let timer = Timer::new("login");
        let result = self.session.login(identifier, secret).await;

        let success = match result {
            Ok(true) => {
                self.notifications.enqueue(
                    CURRENT_USER,
                    "¡Bienvenido!",
                    "Has iniciado sesión correctamente",
                    Severity::Success,
                );
                true
            }
            Ok(false) => {
                self.notifications.enqueue(
                    CURRENT_USER,
                    "Error de autenticación",
                    "Email o contraseña incorrectos",
                    Severity::Error,
                );
                false
            }
            Err(e) => {
                warn!(error = %e, "Login failed unexpectedly");
                self.notifications.enqueue(
                    CURRENT_USER,
                    "Error del sistema",
                    "Ocurrió un error inesperado. Intente nuevamente.",
                    Severity::Error,
                );
                false
            }
        };

        self.metrics.track_login(timer.finish(), success);
        success
    }

    fn logout(&self) -> SessionResult<()> {
        self.session.logout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{InMemoryStorage, MockAuthenticator};
    use std::time::Duration;

    fn service() -> (AuthServiceImpl, NotificationQueue) {
        let session = SessionStore::create(
            Arc::new(InMemoryStorage::new()),
            Arc::new(MockAuthenticator::new()),
            "dental_user",
        )
        .unwrap();
        let queue = NotificationQueue::new(Duration::from_secs(5));
        let service = AuthServiceImpl::new(Arc::new(session), queue.clone(), PortalMetrics::new());
        (service, queue)
    }

    #[tokio::test]
    async fn test_login_success_notifies() {
        let (service, queue) = service();
        assert!(service.login("a@b.co", "secreto").await);

        let notifications = queue.list();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].severity, Severity::Success);
        assert!(service.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_login_rejected_notifies_error() {
        let (service, queue) = service();
        assert!(!service.login("", "").await);

        let notifications = queue.list();
        assert_eq!(notifications[0].title, "Error de autenticación");
        assert_eq!(notifications[0].severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_logout() {
        let (service, _) = service();
        service.login("a@b.co", "secreto").await;
        service.logout().unwrap();
        assert!(!service.session().is_authenticated());
    }
}
