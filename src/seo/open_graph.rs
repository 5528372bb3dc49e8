use super::iso_datetime;
use super::resolve::ResolvedMetadata;
use crate::models::config::SiteConfig;
use crate::models::item::{ContentItem, ItemKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgTag {
    pub property: String,
    pub value: String,
}

/// Open Graph tags in emission order. Site name and locale come first,
/// then the kind-specific block. `item` is `None` for the homepage.
pub fn assemble_open_graph(
    item: Option<&ContentItem>,
    resolved: &ResolvedMetadata,
    config: &SiteConfig,
) -> Vec<OgTag> {
    let mut tags = Vec::new();
    push_tag(&mut tags, "og:site_name", &config.site_name);
    push_tag(&mut tags, "og:locale", &config.locale);

    match item {
        Some(item) if item.kind != ItemKind::Home => item_tags(&mut tags, item, resolved),
        _ => home_tags(&mut tags, resolved, config),
    }

    tags
}

fn item_tags(tags: &mut Vec<OgTag>, item: &ContentItem, resolved: &ResolvedMetadata) {
    let og_type = if item.kind == ItemKind::Article {
        "article"
    } else {
        "website"
    };
    push_tag(tags, "og:type", og_type);
    push_tag(tags, "og:url", &resolved.canonical);
    push_tag(tags, "og:title", &resolved.title);
    push_tag(tags, "og:description", &resolved.description);

    if let Some(image) = &resolved.share_image {
        push_tag(tags, "og:image", &image.url);
        // Unknown dimensions are omitted individually, never zeroed.
        if let Some(width) = image.width {
            push_tag(tags, "og:image:width", &width.to_string());
        }
        if let Some(height) = image.height {
            push_tag(tags, "og:image:height", &height.to_string());
        }
    }

    if og_type == "article" {
        push_tag(
            tags,
            "article:published_time",
            &iso_datetime(item.published_at),
        );
        push_tag(
            tags,
            "article:modified_time",
            &iso_datetime(item.modified_at),
        );
    }
}

fn home_tags(tags: &mut Vec<OgTag>, resolved: &ResolvedMetadata, config: &SiteConfig) {
    push_tag(tags, "og:type", "website");
    push_tag(tags, "og:url", &config.home_url());
    push_tag(tags, "og:title", &resolved.title);
    push_tag(tags, "og:description", &resolved.description);
    if let Some(image) = &resolved.share_image {
        push_tag(tags, "og:image", &image.url);
    }
}

/// Empty values are suppressed entirely; the literal string "0" is a real
/// value and goes through.
fn push_tag(tags: &mut Vec<OgTag>, property: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    tags.push(OgTag {
        property: property.to_string(),
        value: value.to_string(),
    });
}
