// Key-value persistence seam - favorites talk to this, not to SQLite directly
use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use storefront_cache::CacheManager;

#[cfg(test)]
use mockall::automock;

/// String key-value storage the favorites store persists through
///
/// Each call suspends the caller until the backing store has answered.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}

#[async_trait]
impl KeyValueStore for CacheManager {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get_value(key)?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.set_value(key, value)?)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.delete_value(key)?;
        Ok(())
    }
}

/// Process-local store backed by a HashMap
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_values<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> Result<R> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| crate::Error::StorageError("memory store lock poisoned".into()))?;
        Ok(f(&mut values))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_values(|values| values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_values(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.with_values(|values| {
            values.remove(key);
        })
    }
}
