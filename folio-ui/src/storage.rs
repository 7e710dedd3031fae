//! Local storage helpers

use folio_common::theme::PreferenceStore;

pub fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    match get_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("Failed to persist {key}: {e:?}");
            }
        }
        None => tracing::debug!("Local storage unavailable, not persisting {key}"),
    }
}

/// [`PreferenceStore`] backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_string(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        set_string(key, value);
    }
}
