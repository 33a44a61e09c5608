use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage access failed: {0}")]
    Access(String),
}

/// String key/value persistence (browser `localStorage`/`sessionStorage`).
pub trait StorageBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local fallback used when the host storage cannot be reached.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: FnvHashMap<String, String>,
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}
