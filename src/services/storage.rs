use gloo_storage::Storage;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::Config;
use crate::models::exchange::Currency;

/// Best-effort string key-value store for UI preferences.
///
/// Reads yield `None` when the value is missing or unreadable; writes never fail
/// from the caller's point of view.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        gloo_storage::LocalStorage::get(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = gloo_storage::LocalStorage::set(key, value) {
            gloo::console::warn!(format!("Failed to save {key}: {e:?}"));
        }
    }
}

/// In-memory store, used where no browser storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Typed access to the persisted UI preferences
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// `None` when nothing usable was stored
    pub fn sidebar_collapsed(&self) -> Option<bool> {
        self.store
            .get(Config::SIDEBAR_COLLAPSED_KEY)
            .and_then(|v| v.parse().ok())
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.store
            .set(Config::SIDEBAR_COLLAPSED_KEY, &collapsed.to_string());
    }

    /// Stored display currency, EUR when missing or unknown
    pub fn currency(&self) -> Currency {
        self.store
            .get(Config::CURRENCY_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_currency(&self, currency: Currency) {
        self.store.set(Config::CURRENCY_KEY, currency.code());
    }
}
