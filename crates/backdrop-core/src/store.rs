//! Site-wide theme preference store.
//!
//! Initialization order: stored preference, then the system colour scheme
//! (via [`ThemePreference::System`]), then dark when the system cannot say.
//! Subscribers are notified only when the *resolved* theme changes.

use crate::signal::{Signal, SubscriptionId};
use crate::storage::StorageBackend;
use crate::theme::{Theme, ThemePreference};

pub const THEME_STORAGE_KEY: &str = "theme";

pub struct ThemeStore<B: StorageBackend> {
    backend: B,
    preference: ThemePreference,
    system_dark: Option<bool>,
    listeners: Signal<Theme>,
}

impl<B: StorageBackend> ThemeStore<B> {
    pub fn new(backend: B, system_dark: Option<bool>) -> Self {
        let preference = match backend.load(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_else(|| {
                log::warn!("[theme] ignoring unknown stored preference {:?}", raw);
                ThemePreference::System
            }),
            Ok(None) => ThemePreference::System,
            Err(e) => {
                log::warn!("[theme] could not read stored preference: {}", e);
                ThemePreference::System
            }
        };
        log::info!(
            "[theme] preference={} resolved={}",
            preference.as_str(),
            preference.resolve(system_dark).as_str()
        );
        Self {
            backend,
            preference,
            system_dark,
            listeners: Signal::default(),
        }
    }

    pub fn get(&self) -> ThemePreference {
        self.preference
    }

    pub fn resolved(&self) -> Theme {
        self.preference.resolve(self.system_dark)
    }

    pub fn set(&mut self, preference: ThemePreference) {
        let before = self.resolved();
        self.preference = preference;
        if let Err(e) = self.backend.save(THEME_STORAGE_KEY, preference.as_str()) {
            log::warn!("[theme] could not persist preference: {}", e);
        }
        self.notify_if_changed(before);
    }

    /// Flip between light and dark, pinning the result as an explicit choice.
    pub fn toggle(&mut self) -> Theme {
        let next = self.resolved().toggled();
        self.set(next.into());
        next
    }

    /// Host colour-scheme change; only matters while following the system.
    pub fn set_system_dark(&mut self, dark: bool) {
        let before = self.resolved();
        self.system_dark = Some(dark);
        self.notify_if_changed(before);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Theme) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn notify_if_changed(&mut self, before: Theme) {
        let after = self.resolved();
        if after != before {
            log::debug!("[theme] {} -> {}", before.as_str(), after.as_str());
            self.listeners.emit(&after);
        }
    }
}
