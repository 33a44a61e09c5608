//! Page-wide theme store shared by every mounted backdrop.
//!
//! Initialised lazily on first use: stored preference, then the OS colour
//! scheme, then dark. The resolved theme is mirrored onto `<html>` so CSS and
//! the canvases agree.

use crate::constants::{DARK_SCHEME_QUERY, DARK_THEME_CLASS, THEME_DATA_ATTRIBUTE};
use crate::media::{self, MediaWatch};
use crate::storage;
use backdrop_core::{StorageBackend, SubscriptionId, Theme, ThemePreference, ThemeStore};
use std::cell::RefCell;
use web_sys as web;

type Store = ThemeStore<Box<dyn StorageBackend>>;

thread_local! {
    static STORE: RefCell<Option<Store>> = const { RefCell::new(None) };
    static SYSTEM_WATCH: RefCell<Option<MediaWatch>> = const { RefCell::new(None) };
}

fn with_store<R>(f: impl FnOnce(&mut Store) -> R) -> R {
    let (result, first_init) = STORE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let first_init = slot.is_none();
        let store = slot.get_or_insert_with(create_store);
        (f(store), first_init)
    });
    if first_init {
        watch_system_scheme();
    }
    result
}

fn create_store() -> Store {
    let system_dark = web::window().and_then(|w| media::matches(&w, DARK_SCHEME_QUERY));
    let mut store = ThemeStore::new(storage::local(), system_dark);
    apply_to_document(store.resolved());
    store.subscribe(|theme| apply_to_document(*theme));
    store
}

fn watch_system_scheme() {
    let Some(window) = web::window() else {
        return;
    };
    let watch = media::watch(&window, DARK_SCHEME_QUERY, |dark| {
        with_store(|s| s.set_system_dark(dark));
    });
    SYSTEM_WATCH.with(|cell| *cell.borrow_mut() = watch);
}

fn apply_to_document(theme: Theme) {
    let Some(root) = crate::dom::window_document().and_then(|d| d.document_element()) else {
        return;
    };
    let classes = root.class_list();
    _ = match theme {
        Theme::Dark => classes.add_1(DARK_THEME_CLASS),
        Theme::Light => classes.remove_1(DARK_THEME_CLASS),
    };
    _ = root.set_attribute(THEME_DATA_ATTRIBUTE, theme.as_str());
}

pub fn init() {
    with_store(|_| ());
}

pub fn preference() -> ThemePreference {
    with_store(|s| s.get())
}

pub fn resolved() -> Theme {
    with_store(|s| s.resolved())
}

pub fn set(preference: ThemePreference) {
    with_store(|s| s.set(preference));
}

pub fn toggle() -> Theme {
    with_store(|s| s.toggle())
}

pub fn subscribe(listener: impl FnMut(&Theme) + 'static) -> SubscriptionId {
    with_store(|s| s.subscribe(listener))
}

pub fn unsubscribe(id: SubscriptionId) {
    with_store(|s| s.unsubscribe(id));
}
