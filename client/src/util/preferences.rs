//! Client-side key/value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page persists a single preference (the theme). Storage access goes
//! through [`PreferenceStore`] so the browser `localStorage` binding stays
//! behind the `hydrate` feature while server rendering uses [`Unavailable`]
//! and tests use an in-memory map.
//!
//! TRADE-OFFS
//! ==========
//! Every operation returns a `Result`, but callers treat storage as
//! best-effort: a failed read means "no preference", a failed write only
//! loses persistence for the next session.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// Failure to reach or use client storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// No storage exists in this context (server rendering, disabled storage).
    #[error("client storage unavailable")]
    Unavailable,

    /// The browser raised an exception (quota, privacy mode, security policy).
    #[error("client storage access failed: {0}")]
    Access(String),
}

#[cfg(feature = "hydrate")]
impl PreferenceError {
    pub(crate) fn from_js(err: &wasm_bindgen::JsValue) -> Self {
        Self::Access(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

/// String key/value store for user preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] if the store cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] if the store cannot be reached or rejects
    /// the write.
    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-process store backed by a `HashMap`.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Current value for `key`, bypassing the trait's `Result`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store for contexts without client storage. Every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unavailable;

impl PreferenceStore for Unavailable {
    fn read(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Err(PreferenceError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Unavailable)
    }
}

/// `window.localStorage` binding.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// Resolve `window.localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Unavailable`] when there is no window or the
    /// browser exposes no storage, and [`PreferenceError::Access`] when the
    /// lookup itself throws (e.g. storage disabled by policy).
    pub fn open() -> Result<Self, PreferenceError> {
        let window = web_sys::window().ok_or(PreferenceError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|e| PreferenceError::from_js(&e))?
            .ok_or(PreferenceError::Unavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.storage.get_item(key).map_err(|e| PreferenceError::from_js(&e))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage.set_item(key, value).map_err(|e| PreferenceError::from_js(&e))
    }
}

/// The preference store for the current build and environment.
///
/// Browser builds get `localStorage` when it can be opened; everything else
/// gets [`Unavailable`].
pub fn browser_store() -> Box<dyn PreferenceStore> {
    #[cfg(feature = "hydrate")]
    {
        match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("localStorage not available: {e}");
                Box::new(Unavailable)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Box::new(Unavailable)
    }
}
