use serde::Serialize;

use crate::models::config::SiteConfig;
use crate::models::item::{ContentItem, ItemKind};

/// One hop in the navigational path, positions starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    pub position: usize,
    pub name: String,
    pub url: String,
}

/// Ordered path home → category → item. The category hop applies to
/// articles only; pages never get one even when a category is assigned.
/// The final entry uses the item's own title, not the SEO override.
///
/// Returns `None` for the Home kind and for paths shorter than two
/// entries (the Home entry is always emitted, so the guard is defensive).
pub fn build_breadcrumbs(item: &ContentItem, config: &SiteConfig) -> Option<Vec<BreadcrumbEntry>> {
    if item.kind == ItemKind::Home {
        return None;
    }

    let mut entries = vec![BreadcrumbEntry {
        position: 1,
        name: "Home".to_string(),
        url: config.home_url(),
    }];

    if item.kind == ItemKind::Article {
        if let Some(category) = &item.category {
            entries.push(BreadcrumbEntry {
                position: entries.len() + 1,
                name: category.name.clone(),
                url: category.url.clone(),
            });
        }
    }

    entries.push(BreadcrumbEntry {
        position: entries.len() + 1,
        name: item.title.clone(),
        url: item.permalink.clone(),
    });

    if entries.len() < 2 {
        return None;
    }
    Some(entries)
}
