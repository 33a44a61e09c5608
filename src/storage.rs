use backdrop_core::{MemoryStorage, SessionFlags, StorageBackend, StorageError};
use web_sys as web;

/// `localStorage` / `sessionStorage` backend.
pub struct WebStorage {
    storage: web::Storage,
}

impl StorageBackend for WebStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

fn or_memory(
    storage: Result<Option<web::Storage>, wasm_bindgen::JsValue>,
    which: &str,
) -> Box<dyn StorageBackend> {
    match storage {
        Ok(Some(storage)) => Box::new(WebStorage { storage }),
        Ok(None) | Err(_) => {
            // private browsing or sandboxed iframes
            log::debug!("[storage] {} unavailable, keeping values in memory", which);
            Box::new(MemoryStorage::default())
        }
    }
}

pub fn local() -> Box<dyn StorageBackend> {
    match web::window() {
        Some(w) => or_memory(w.local_storage(), "localStorage"),
        None => Box::new(MemoryStorage::default()),
    }
}

pub fn session_flags() -> SessionFlags<Box<dyn StorageBackend>> {
    let backend = match web::window() {
        Some(w) => or_memory(w.session_storage(), "sessionStorage"),
        None => Box::new(MemoryStorage::default()),
    };
    SessionFlags::new(backend)
}
