//! Key-value storage backing the store.
//!
//! Values are whole JSON documents; a key maps to exactly one record.

mod file_storage;
mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use crate::SessionResult;

/// Durable string records addressed by key.
///
/// All methods take `&self`; implementations needing mutation use interior
/// mutability.
pub trait KeyValueStorage {
    /// Get a record, `None` if absent
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    /// Create or replace a record
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Remove a record; removing an absent key is not an error
    fn delete(&self, key: &str) -> SessionResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> SessionResult<()> {
        (**self).delete(key)
    }
}
