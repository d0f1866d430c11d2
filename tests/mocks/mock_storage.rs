use dental_registry::error::{SessionError, SessionResult};
use dental_registry::session::{InMemoryStorage, SessionStorage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// In-memory storage whose writes can be switched off.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FlakyStorage {
    inner: InMemoryStorage,
    fail_writes: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl FlakyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn seed(&self, key: &str, value: &str) {
        self.inner.set(key, value.to_string()).unwrap();
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).unwrap()
    }

    fn check_writable(&self) -> SessionResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SessionError::Storage("quota exceeded".to_string()));
        }
        Ok(())
    }
}

impl SessionStorage for FlakyStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: String) -> SessionResult<()> {
        self.check_writable()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.check_writable()?;
        self.inner.remove(key)
    }
}
