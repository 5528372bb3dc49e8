use std::collections::HashMap;

pub mod memory;

pub use memory::MemoryStore;

/// Storage key prefix for per-item override fields. One entry per item per
/// field, key absent when the field was never set.
pub const OVERRIDE_PREFIX: &str = "meta_";

/// Unified settings/override access trait. The hosting system implements
/// this over its own settings backend; `MemoryStore` is the reference
/// implementation used by tests and embedders without one.
///
/// Override values reaching this trait are already validated and sanitized
/// at the boundary. Implementations must treat an empty (post-trim) value
/// passed to `override_set` as a clear: key absence is the only "not set"
/// signal, an empty string is never stored.
pub trait MetaStore: Send + Sync {
    // ── Settings ────────────────────────────────────────────────────
    fn setting_get(&self, key: &str) -> Option<String>;
    fn setting_get_or(&self, key: &str, default: &str) -> String {
        self.setting_get(key).unwrap_or_else(|| default.to_string())
    }
    fn setting_get_bool(&self, key: &str) -> bool {
        self.setting_get(key)
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false)
    }
    fn setting_set(&self, key: &str, value: &str) -> Result<(), String>;
    fn setting_set_many(&self, settings: &HashMap<String, String>) -> Result<(), String>;

    // ── Per-item overrides ──────────────────────────────────────────
    fn override_get(&self, item_id: &str, key: &str) -> Option<String>;
    fn override_set(&self, item_id: &str, key: &str, value: &str) -> Result<(), String>;
    fn override_clear(&self, item_id: &str, key: &str) -> Result<(), String>;
}
