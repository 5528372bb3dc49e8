use log::{debug, warn};

use super::html_escape;
use super::jsonld::{assemble_structured_data, StructuredData};
use super::meta::{assemble_plain_meta, MetaKind};
use super::open_graph::assemble_open_graph;
use super::resolve::{full_title, resolve_for_home, resolve_for_item, ResolvedMetadata};
use super::twitter::assemble_twitter_card;
use crate::models::config::SiteConfig;
use crate::models::item::{ContentItem, ItemKind};

/// Build the head block for a content item: title, plain meta, Open Graph,
/// Twitter Card, JSON-LD — in that fixed order.
pub fn render_head(item: &ContentItem, config: &SiteConfig) -> Result<String, String> {
    let resolved = resolve_for_item(item, config)?;
    Ok(render(Some(item), &resolved, config))
}

/// Build the head block for the homepage (no content item).
pub fn render_head_home(config: &SiteConfig) -> String {
    let resolved = resolve_for_home(config);
    render(None, &resolved, config)
}

fn render(item: Option<&ContentItem>, resolved: &ResolvedMetadata, config: &SiteConfig) -> String {
    let kind = item.map(|i| i.kind).unwrap_or(ItemKind::Home);
    let mut head = String::new();

    let title = full_title(kind, &resolved.title, config);
    if !title.is_empty() {
        head.push_str(&format!("<title>{}</title>\n", html_escape(&title)));
    }

    for record in assemble_plain_meta(resolved) {
        match record.kind {
            MetaKind::Name => head.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\" />\n",
                html_escape(&record.key),
                html_escape(&record.value),
            )),
            MetaKind::Link => head.push_str(&format!(
                "<link rel=\"{}\" href=\"{}\" />\n",
                html_escape(&record.key),
                html_escape(&record.value),
            )),
        }
    }

    for tag in assemble_open_graph(item, resolved, config) {
        head.push_str(&format!(
            "<meta property=\"{}\" content=\"{}\" />\n",
            html_escape(&tag.property),
            html_escape(&tag.value),
        ));
    }

    for tag in assemble_twitter_card(resolved, config) {
        head.push_str(&format!(
            "<meta name=\"{}\" content=\"{}\" />\n",
            html_escape(&tag.name),
            html_escape(&tag.value),
        ));
    }

    let data = assemble_structured_data(item, resolved, config);
    head.push_str(&render_structured_data(&data));

    if head.is_empty() {
        debug!("no head metadata produced for {:?} render", kind);
    }
    head
}

/// Serialize the JSON-LD graphs into one script element. A breadcrumb
/// rides along as a sibling graph in a two-element array.
fn render_structured_data(data: &StructuredData) -> String {
    let payload = match &data.breadcrumb {
        Some(breadcrumb) => serde_json::json!([data.primary, breadcrumb]),
        None => data.primary.clone(),
    };
    match serde_json::to_string_pretty(&payload) {
        Ok(json) => format!(
            "<script type=\"application/ld+json\">\n{}\n</script>\n",
            json
        ),
        Err(e) => {
            warn!("failed to serialize structured data: {}", e);
            String::new()
        }
    }
}
