use serde::{Deserialize, Serialize};
use url::Url;

use crate::store::MetaStore;

/// Site-wide settings snapshot. Loaded once per request, read-only during
/// resolution — never consulted through any ambient global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site_name: String,
    pub site_url: String,
    pub tagline: String,
    pub locale: String,
    pub title_separator: String,
    pub default_description: String,
    pub default_share_image: String,
    pub twitter_handle: String,
    pub facebook_url: String,
    pub homepage_title: String,
    pub homepage_description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: String::new(),
            site_url: "http://localhost:8000".to_string(),
            tagline: String::new(),
            locale: "en_US".to_string(),
            title_separator: "|".to_string(),
            default_description: String::new(),
            default_share_image: String::new(),
            twitter_handle: String::new(),
            facebook_url: String::new(),
            homepage_title: String::new(),
            homepage_description: String::new(),
        }
    }
}

impl SiteConfig {
    /// Build a snapshot from stored settings, falling back to defaults for
    /// keys that were never saved.
    pub fn load(store: &dyn MetaStore) -> Self {
        SiteConfig {
            site_name: store.setting_get_or("site_name", ""),
            site_url: store.setting_get_or("site_url", "http://localhost:8000"),
            tagline: store.setting_get_or("site_tagline", ""),
            locale: store.setting_get_or("site_locale", "en_US"),
            title_separator: store.setting_get_or("title_separator", "|"),
            default_description: store.setting_get_or("default_description", ""),
            default_share_image: store.setting_get_or("default_share_image", ""),
            twitter_handle: store.setting_get_or("twitter_handle", ""),
            facebook_url: store.setting_get_or("facebook_url", ""),
            homepage_title: store.setting_get_or("homepage_title", ""),
            homepage_description: store.setting_get_or("homepage_description", ""),
        }
    }

    /// Site root URL with a trailing slash. Used for the home canonical,
    /// Open Graph home URL, and breadcrumb root.
    pub fn home_url(&self) -> String {
        let base = match Url::parse(&self.site_url) {
            Ok(parsed) => parsed.to_string(),
            Err(_) => self.site_url.clone(),
        };
        if base.ends_with('/') {
            base
        } else {
            format!("{}/", base)
        }
    }
}
