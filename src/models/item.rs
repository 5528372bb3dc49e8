use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::MetaStore;

/// Determines which schema type a page emits (Article, WebPage, WebSite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Article,
    Page,
    Home,
}

/// Structured image reference with known dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// The item's primary category. Items with several categories only ever
/// surface the first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub url: String,
}

/// Per-item editor overrides. A `None` field was never set; stored values
/// are non-empty post-trim (clearing a field removes the key, it never
/// stores an empty string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub keyword: Option<String>,
    pub noindex: bool,
    pub nofollow: bool,
}

impl Overrides {
    /// Load all override fields for one item from the store.
    pub fn load(store: &dyn MetaStore, item_id: &str) -> Self {
        Overrides {
            title: store.override_get(item_id, "title"),
            description: store.override_get(item_id, "description"),
            canonical: store.override_get(item_id, "canonical"),
            keyword: store.override_get(item_id, "keyword"),
            noindex: store.override_get(item_id, "noindex").as_deref() == Some("1"),
            nofollow: store.override_get(item_id, "nofollow").as_deref() == Some("1"),
        }
    }
}

/// One addressable page-like entity, as supplied by the hosting system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub kind: ItemKind,
    pub title: String,
    pub body: String,
    pub excerpt: String,
    pub permalink: String,
    pub published_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    /// Empty when the author is unknown.
    pub author_name: String,
    pub primary_image: Option<ImageRef>,
    pub category: Option<CategoryRef>,
    pub overrides: Overrides,
}

impl ContentItem {
    /// Caller contract check. A modified timestamp earlier than the
    /// published one means the item is structurally invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.modified_at < self.published_at {
            return Err(format!(
                "content item {}: modified_at precedes published_at",
                self.id
            ));
        }
        Ok(())
    }
}
