use std::cell::Cell;

use log::{debug, warn};
use web_sys::{window, Storage};

use super::mode::ThemeMode;
use crate::config;
use crate::error::{describe, SiteError};

/// Persistent key/value storage for user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn write(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// Publishes the mode somewhere the static stylesheet can see it.
pub trait DocumentAnnotator {
    fn annotate(&self, attribute: &str, value: &str) -> Result<(), SiteError>;
}

/// `window.localStorage`, looked up on every call so a storage that appears
/// or disappears mid-session is handled.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, SiteError> {
        let window = window().ok_or(SiteError::NoWindow)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(SiteError::StorageUnavailable("no localStorage".to_string())),
            Err(e) => Err(SiteError::StorageUnavailable(describe(&e))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError> {
        Self::storage()?.get_item(key).map_err(|e| SiteError::StorageRead {
            key: key.to_string(),
            reason: describe(&e),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SiteError> {
        Self::storage()?.set_item(key, value).map_err(|e| SiteError::StorageWrite {
            key: key.to_string(),
            reason: describe(&e),
        })
    }
}

/// The `<html>` element of the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct RootElement;

impl DocumentAnnotator for RootElement {
    fn annotate(&self, attribute: &str, value: &str) -> Result<(), SiteError> {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or(SiteError::NoWindow)?;
        root.set_attribute(attribute, value).map_err(|e| SiteError::Document {
            attribute: attribute.to_string(),
            reason: describe(&e),
        })
    }
}

/// Owns the page's theme preference. One instance per page, handed to the
/// component tree instead of being reached for globally.
pub struct ThemeManager<S, D> {
    store: S,
    document: D,
    mode: Cell<ThemeMode>,
}

pub type BrowserThemeManager = ThemeManager<LocalStorage, RootElement>;

impl BrowserThemeManager {
    pub fn browser() -> Self {
        ThemeManager::new(LocalStorage, RootElement)
    }
}

impl<S: PreferenceStore, D: DocumentAnnotator> ThemeManager<S, D> {
    pub fn new(store: S, document: D) -> Self {
        ThemeManager {
            store,
            document,
            mode: Cell::new(ThemeMode::default()),
        }
    }

    /// Loads the persisted mode. Never fails: any storage problem means light.
    pub fn initialize(&self) -> ThemeMode {
        let mode = match self.store.read(config::THEME_STORAGE_KEY) {
            Ok(stored) => ThemeMode::from_stored(stored.as_deref()),
            Err(e) => {
                warn!("Theme preference unreadable, using light: {}", e);
                ThemeMode::Light
            }
        };
        debug!("Initial theme mode: {}", mode);
        self.mode.set(mode);
        mode
    }

    /// Loads the persisted mode and publishes it straight away, so the
    /// document attribute and storage agree with the page from the start.
    pub fn start(&self) -> ThemeMode {
        let mode = self.initialize();
        self.publish(mode);
        mode
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Makes `mode` current and publishes it. Safe to call repeatedly with
    /// the same mode.
    pub fn set(&self, mode: ThemeMode) {
        self.mode.set(mode);
        self.publish(mode);
    }

    pub fn toggle(&self) -> ThemeMode {
        let next = self.mode.get().toggled();
        self.set(next);
        next
    }

    // Both sinks are attempted even if the first one fails.
    fn publish(&self, mode: ThemeMode) {
        if let Err(e) = self.document.annotate(config::THEME_ATTRIBUTE, mode.as_str()) {
            warn!("Could not annotate document with theme: {}", e);
        }
        if let Err(e) = self.store.write(config::THEME_STORAGE_KEY, mode.as_str()) {
            warn!("Could not persist theme preference: {}", e);
        }
    }
}
