use crate::storage::StorageBackend;

pub const INTRO_SEEN_KEY: &str = "intro-seen";
const SEEN: &str = "1";

/// Ephemeral per-session "already shown" flags, e.g. the intro animation.
pub struct SessionFlags<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SessionFlags<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Unreadable storage counts as not seen, so the intro still plays.
    pub fn has_seen(&self, key: &str) -> bool {
        match self.backend.load(key) {
            Ok(value) => value.as_deref() == Some(SEEN),
            Err(e) => {
                log::debug!("[session] read {} failed: {}", key, e);
                false
            }
        }
    }

    pub fn mark_seen(&mut self, key: &str) {
        if let Err(e) = self.backend.save(key, SEEN) {
            log::debug!("[session] write {} failed: {}", key, e);
        }
    }
}
