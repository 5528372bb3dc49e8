//! SEO metadata generation for content pages: meta tags, Open Graph,
//! Twitter Cards, and JSON-LD structured data.
//!
//! The hosting system fetches a [`ContentItem`] and a [`SiteConfig`]
//! snapshot, then calls the resolution engine once per rendered page.
//! Resolution is pure and total over its inputs; settings and per-item
//! overrides sit behind the [`MetaStore`] trait.

pub mod models;
pub mod seo;
pub mod store;


pub use models::config::SiteConfig;
pub use models::item::{CategoryRef, ContentItem, ImageRef, ItemKind, Overrides};
pub use seo::render::{render_head, render_head_home};
pub use seo::resolve::{resolve_for_home, resolve_for_item, ResolvedMetadata};
pub use store::{MemoryStore, MetaStore};
