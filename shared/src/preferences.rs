use std::collections::HashMap;

use log::warn;

use crate::constants::{DEFAULT_LABELS, LABELS_KEY, THEME_KEY};
use crate::theme::Theme;
use crate::validation::normalize_label;

/// Flat key/value storage for per-browser preferences.
///
/// Writes are fire-and-forget: an implementation that cannot persist a value
/// logs and carries on, the wheel keeps working from memory.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used off the browser and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

pub fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|label| label.to_string()).collect()
}

/// Loads the saved label list, falling back to the built-in defaults when the
/// entry is missing or unreadable. A saved empty list stays empty.
///
/// Saved entries go through the same trimming as new labels; blank ones are dropped.
pub fn load_labels(store: &impl PreferenceStore) -> Vec<String> {
    let Some(raw) = store.get(LABELS_KEY) else {
        return default_labels();
    };

    let saved = match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(saved) => saved,
        Err(e) => {
            warn!("Ignoring unreadable saved labels: {}", e);
            return default_labels();
        }
    };

    let total = saved.len();
    let labels: Vec<String> = saved.iter().filter_map(|label| normalize_label(label)).collect();
    if labels.len() < total {
        warn!("Dropped {} blank saved labels", total - labels.len());
    }
    labels
}

pub fn save_labels(store: &mut impl PreferenceStore, labels: &[String]) {
    match serde_json::to_string(labels) {
        Ok(serialized) => store.set(LABELS_KEY, &serialized),
        Err(e) => warn!("Failed to serialize labels: {}", e),
    }
}

pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|value| value.parse::<Theme>().ok())
        .unwrap_or_default()
}

pub fn save_theme(store: &mut impl PreferenceStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}
