use super::resolve::{format_social_handle, ResolvedMetadata};
use crate::models::config::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterTag {
    pub name: String,
    pub value: String,
}

/// Twitter Card tags. The card type leads; the site handle appears only
/// when configured. Title, description, and image come straight from the
/// shared resolved values so the card can never drift from Open Graph.
pub fn assemble_twitter_card(resolved: &ResolvedMetadata, config: &SiteConfig) -> Vec<TwitterTag> {
    let mut tags = Vec::new();
    push_tag(&mut tags, "twitter:card", "summary_large_image");
    push_tag(
        &mut tags,
        "twitter:site",
        &format_social_handle(&config.twitter_handle),
    );
    push_tag(&mut tags, "twitter:title", &resolved.title);
    push_tag(&mut tags, "twitter:description", &resolved.description);
    if let Some(image) = &resolved.share_image {
        push_tag(&mut tags, "twitter:image", &image.url);
    }
    tags
}

fn push_tag(tags: &mut Vec<TwitterTag>, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    tags.push(TwitterTag {
        name: name.to_string(),
        value: value.to_string(),
    });
}
