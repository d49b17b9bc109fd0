use log::warn;
use shared::preferences::PreferenceStore;
use web_sys::{window, Storage};

/// Preferences kept in `window.localStorage`.
///
/// Storage is looked up on every call; when it is missing (private mode,
/// disabled cookies) reads come back empty and writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!("Failed to save {} to localStorage", key);
                }
            }
            None => warn!("localStorage unavailable, {} not saved", key),
        }
    }
}
