use regex::Regex;

use crate::models::config::SiteConfig;
use crate::models::item::{ContentItem, ItemKind};

/// Word limit for auto-generated descriptions.
pub const DESCRIPTION_WORD_LIMIT: usize = 30;

/// Crawler directives, emitted noindex-before-nofollow when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsDirective {
    Noindex,
    Nofollow,
}

impl RobotsDirective {
    pub fn as_str(self) -> &'static str {
        match self {
            RobotsDirective::Noindex => "noindex",
            RobotsDirective::Nofollow => "nofollow",
        }
    }
}

/// Social preview image. Width/height are `None` when unknown (content-scan
/// and config-default images carry no dimensions), never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Effective metadata values for one page render. Constructed fresh per
/// render and discarded once the assemblers have consumed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub robots: Vec<RobotsDirective>,
    pub share_image: Option<ShareImage>,
    pub share_image_dimensions_known: bool,
}

/// Resolve every metadata surface for a content item.
///
/// The only error is the caller contract violation `modified_at <
/// published_at`; everything else degrades to empty/none.
pub fn resolve_for_item(
    item: &ContentItem,
    config: &SiteConfig,
) -> Result<ResolvedMetadata, String> {
    item.validate()?;
    let share_image = resolve_share_image(item, config);
    let dimensions_known = share_image
        .as_ref()
        .map(|img| img.width.is_some() && img.height.is_some())
        .unwrap_or(false);
    Ok(ResolvedMetadata {
        title: resolve_title(item, config),
        description: resolve_description(item, config),
        canonical: resolve_canonical(item, config),
        robots: resolve_robots(item),
        share_image,
        share_image_dimensions_known: dimensions_known,
    })
}

/// Resolve metadata for the homepage, where no content item exists.
pub fn resolve_for_home(config: &SiteConfig) -> ResolvedMetadata {
    let share_image = if config.default_share_image.is_empty() {
        None
    } else {
        Some(ShareImage {
            url: config.default_share_image.clone(),
            width: None,
            height: None,
        })
    };
    ResolvedMetadata {
        title: home_title(config),
        description: home_description(config),
        canonical: config.home_url(),
        robots: Vec::new(),
        share_image,
        share_image_dimensions_known: false,
    }
}

/// SEO title: editor override, else the item's own title. Home uses the
/// configured homepage title, else the site name.
pub fn resolve_title(item: &ContentItem, config: &SiteConfig) -> String {
    if item.kind == ItemKind::Home {
        return home_title(config);
    }
    match &item.overrides.title {
        Some(title) => title.clone(),
        None => item.title.clone(),
    }
}

/// Meta description fallback chain: override → (home: configured homepage
/// description, else tagline) → excerpt → stripped body → site default →
/// empty. Excerpt and body are trimmed to [`DESCRIPTION_WORD_LIMIT`] words
/// with no ellipsis.
pub fn resolve_description(item: &ContentItem, config: &SiteConfig) -> String {
    if let Some(custom) = &item.overrides.description {
        return custom.clone();
    }

    if item.kind == ItemKind::Home {
        return home_description(config);
    }

    if !item.excerpt.is_empty() {
        return trim_words(&item.excerpt, DESCRIPTION_WORD_LIMIT);
    }

    if !item.body.is_empty() {
        let stripped = strip_markup(&item.body);
        if !stripped.is_empty() {
            return trim_words(&stripped, DESCRIPTION_WORD_LIMIT);
        }
    }

    config.default_description.clone()
}

/// Canonical URL: editor override, else the permalink. Home canonicalizes
/// to the site root.
pub fn resolve_canonical(item: &ContentItem, config: &SiteConfig) -> String {
    if item.kind == ItemKind::Home {
        return config.home_url();
    }
    match &item.overrides.canonical {
        Some(canonical) => canonical.clone(),
        None => item.permalink.clone(),
    }
}

/// Robots directives in fixed order: noindex, then nofollow.
pub fn resolve_robots(item: &ContentItem) -> Vec<RobotsDirective> {
    let mut directives = Vec::new();
    if item.overrides.noindex {
        directives.push(RobotsDirective::Noindex);
    }
    if item.overrides.nofollow {
        directives.push(RobotsDirective::Nofollow);
    }
    directives
}

/// Share image fallback chain: primary image (dimensions known) → first
/// `<img src>` in the body → configured default → none. Home skips the
/// item-level sources and only considers the configured default.
pub fn resolve_share_image(item: &ContentItem, config: &SiteConfig) -> Option<ShareImage> {
    let config_default = || {
        if config.default_share_image.is_empty() {
            None
        } else {
            Some(ShareImage {
                url: config.default_share_image.clone(),
                width: None,
                height: None,
            })
        }
    };

    if item.kind == ItemKind::Home {
        return config_default();
    }

    if let Some(image) = &item.primary_image {
        return Some(ShareImage {
            url: image.url.clone(),
            width: Some(image.width),
            height: Some(image.height),
        });
    }

    if let Some(url) = first_content_image(&item.body) {
        return Some(ShareImage {
            url,
            width: None,
            height: None,
        });
    }

    config_default()
}

/// First `<img src="...">` URL in the markup, single first-match scan.
pub fn first_content_image(content: &str) -> Option<String> {
    if content.is_empty() {
        return None;
    }
    let re = Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).ok()?;
    re.captures(content).map(|caps| caps[1].to_string())
}

/// Trim whitespace and ensure a leading `@`. Empty input stays empty — no
/// bare `@` is ever produced.
pub fn format_social_handle(raw: &str) -> String {
    let handle = raw.trim();
    if handle.is_empty() {
        return String::new();
    }
    if handle.starts_with('@') {
        handle.to_string()
    } else {
        format!("@{}", handle)
    }
}

/// Document title text: "Title <sep> Site Name" for articles and pages,
/// the resolved title alone for the homepage.
pub fn full_title(kind: ItemKind, resolved_title: &str, config: &SiteConfig) -> String {
    if resolved_title.is_empty() {
        return config.site_name.clone();
    }
    if kind == ItemKind::Home || config.site_name.is_empty() {
        return resolved_title.to_string();
    }
    format!(
        "{} {} {}",
        resolved_title, config.title_separator, config.site_name
    )
}

/// Split on whitespace, keep the first `limit` tokens, rejoin with single
/// spaces. Inputs at or under the limit come back unchanged.
pub fn trim_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        return text.to_string();
    }
    words[..limit].join(" ")
}

/// Strip all markup from a string: script/style blocks go with their
/// contents, remaining tags are dropped, whitespace collapses to single
/// spaces.
pub fn strip_markup(html: &str) -> String {
    let without_blocks = strip_block(&strip_block(html, "script"), "style");

    let mut out = String::with_capacity(without_blocks.len());
    let mut inside_tag = false;
    for ch in without_blocks.chars() {
        match ch {
            '<' => inside_tag = true,
            '>' => inside_tag = false,
            _ if !inside_tag => out.push(ch),
            _ => {}
        }
    }
    // Collapse whitespace
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove `<tag ...>...</tag>` blocks including their contents.
fn strip_block(html: &str, tag: &str) -> String {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);
    let lower = html.to_ascii_lowercase();
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(start) = lower[pos..].find(&open) {
        let start = pos + start;
        out.push_str(&html[pos..start]);
        match lower[start..].find(&close) {
            Some(end) => pos = start + end + close.len(),
            None => return out,
        }
    }
    out.push_str(&html[pos..]);
    out
}

fn home_title(config: &SiteConfig) -> String {
    if config.homepage_title.is_empty() {
        config.site_name.clone()
    } else {
        config.homepage_title.clone()
    }
}

fn home_description(config: &SiteConfig) -> String {
    if !config.homepage_description.is_empty() {
        return config.homepage_description.clone();
    }
    if !config.tagline.is_empty() {
        return config.tagline.clone();
    }
    config.default_description.clone()
}
