use crate::{KeyValueStorage, SessionError, SessionResult};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory storage for tests and ephemeral profiles.
///
/// Clones share the same records.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().map(|data| data.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> SessionResult<MutexGuard<'_, HashMap<String, String>>> {
        self.data
            .lock()
            .map_err(|e| SessionError::storage(format!("Lock poisoned: {e}")))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> SessionResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
