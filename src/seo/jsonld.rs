use serde_json::{json, Value};

use super::breadcrumb::{build_breadcrumbs, BreadcrumbEntry};
use super::iso_datetime;
use super::resolve::ResolvedMetadata;
use crate::models::config::SiteConfig;
use crate::models::item::{ContentItem, ItemKind};

/// JSON-LD output for one render: the page's primary graph plus an
/// optional sibling BreadcrumbList.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredData {
    pub primary: Value,
    pub breadcrumb: Option<Value>,
}

/// Build the structured-data graphs for a page. `item` is `None` for the
/// homepage, which emits a WebSite graph and never a breadcrumb.
pub fn assemble_structured_data(
    item: Option<&ContentItem>,
    resolved: &ResolvedMetadata,
    config: &SiteConfig,
) -> StructuredData {
    match item {
        Some(item) if item.kind == ItemKind::Article => article_schema(item, config),
        Some(item) if item.kind == ItemKind::Page => webpage_schema(item, config),
        _ => StructuredData {
            primary: website_schema(resolved, config),
            breadcrumb: None,
        },
    }
}

/// Article graph. Headline and breadcrumb use the item's own title; the
/// description appears only when the editor set one.
fn article_schema(item: &ContentItem, config: &SiteConfig) -> StructuredData {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": item.title,
        "url": item.permalink,
        "datePublished": iso_datetime(item.published_at),
        "dateModified": iso_datetime(item.modified_at),
        "author": {
            "@type": "Person",
            "name": item.author_name,
        },
        "publisher": publisher(config),
    });

    if let Some(description) = &item.overrides.description {
        schema["description"] = json!(description);
    }

    if let Some(image) = &item.primary_image {
        schema["image"] = json!({
            "@type": "ImageObject",
            "url": image.url,
            "width": image.width,
            "height": image.height,
        });
    }

    let breadcrumbs = build_breadcrumbs(item, config);
    if breadcrumbs.is_some() {
        schema["mainEntityOfPage"] = json!({
            "@type": "WebPage",
            "@id": item.permalink,
        });
    }

    StructuredData {
        primary: schema,
        breadcrumb: breadcrumbs.map(|entries| breadcrumb_schema(&entries)),
    }
}

fn webpage_schema(item: &ContentItem, config: &SiteConfig) -> StructuredData {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": item.title,
        "url": item.permalink,
        "datePublished": iso_datetime(item.published_at),
        "dateModified": iso_datetime(item.modified_at),
        "publisher": publisher(config),
    });

    if let Some(description) = &item.overrides.description {
        schema["description"] = json!(description);
    }

    StructuredData {
        primary: schema,
        breadcrumb: build_breadcrumbs(item, config).map(|entries| breadcrumb_schema(&entries)),
    }
}

fn website_schema(resolved: &ResolvedMetadata, config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": config.site_name,
        "url": config.home_url(),
        "description": resolved.description,
        "publisher": publisher(config),
    })
}

fn publisher(config: &SiteConfig) -> Value {
    json!({
        "@type": "Organization",
        "name": config.site_name,
        "url": config.home_url(),
    })
}

fn breadcrumb_schema(entries: &[BreadcrumbEntry]) -> Value {
    let items: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "@type": "ListItem",
                "position": entry.position,
                "name": entry.name,
                "item": entry.url,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}
