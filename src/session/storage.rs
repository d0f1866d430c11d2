//! Key-value storage for the session snapshot.

use crate::error::{SessionError, SessionResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Minimal string key-value store, the shape of browser local storage.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    fn set(&self, key: &str, value: String) -> SessionResult<()>;

    fn remove(&self, key: &str) -> SessionResult<()>;
}

/// Process-local storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> SessionError {
    SessionError::Storage("storage lock poisoned".to_string())
}

impl SessionStorage for InMemoryStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let values = self.values.read().map_err(|_| poisoned())?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> SessionResult<()> {
        let mut values = self.values.write().map_err(|_| poisoned())?;
        values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut values = self.values.write().map_err(|_| poisoned())?;
        values.remove(key);
        Ok(())
    }
}
