use std::collections::HashMap;
use std::sync::RwLock;

use super::{MetaStore, OVERRIDE_PREFIX};

/// In-memory `MetaStore`. Settings and overrides live in two locked maps;
/// reads clone out so no lock is held across resolution.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: RwLock<HashMap<String, String>>,
    overrides: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh store seeded with the stock settings defaults.
    pub fn with_defaults() -> Self {
        let store = Self::new();
        let defaults = [
            ("title_separator", "|"),
            ("default_description", ""),
            ("default_share_image", ""),
            ("twitter_handle", ""),
            ("facebook_url", ""),
            ("homepage_title", ""),
            ("homepage_description", ""),
        ];
        if let Ok(mut settings) = store.settings.write() {
            for (key, value) in defaults {
                settings.insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    fn override_key(item_id: &str, key: &str) -> String {
        format!("{}:{}{}", item_id, OVERRIDE_PREFIX, key)
    }
}

impl MetaStore for MemoryStore {
    fn setting_get(&self, key: &str) -> Option<String> {
        self.settings.read().ok()?.get(key).cloned()
    }

    fn setting_set(&self, key: &str, value: &str) -> Result<(), String> {
        self.settings
            .write()
            .map_err(|e| e.to_string())?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn setting_set_many(&self, settings: &HashMap<String, String>) -> Result<(), String> {
        let mut map = self.settings.write().map_err(|e| e.to_string())?;
        for (key, value) in settings {
            map.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn override_get(&self, item_id: &str, key: &str) -> Option<String> {
        self.overrides
            .read()
            .ok()?
            .get(&Self::override_key(item_id, key))
            .cloned()
    }

    fn override_set(&self, item_id: &str, key: &str, value: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            // Clearing a field removes the key; empty strings are never stored.
            return self.override_clear(item_id, key);
        }
        self.overrides
            .write()
            .map_err(|e| e.to_string())?
            .insert(Self::override_key(item_id, key), trimmed.to_string());
        Ok(())
    }

    fn override_clear(&self, item_id: &str, key: &str) -> Result<(), String> {
        self.overrides
            .write()
            .map_err(|e| e.to_string())?
            .remove(&Self::override_key(item_id, key));
        Ok(())
    }
}
