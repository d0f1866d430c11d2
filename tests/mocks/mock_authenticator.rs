use async_trait::async_trait;
use dental_registry::error::{AuthError, AuthResult};
use dental_registry::models::User;
use dental_registry::session::Authenticator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Authenticator whose backend is always down.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FailingAuthenticator {
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FailingAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authenticator for FailingAuthenticator {
    async fn authenticate(&self, _identifier: &str, _secret: &str) -> AuthResult<Option<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AuthError::Unavailable("connection refused".to_string()))
    }
}
