pub mod breadcrumb;
pub mod jsonld;
pub mod meta;
pub mod open_graph;
pub mod render;
pub mod resolve;
pub mod twitter;

// Re-export commonly used functions
pub use render::{render_head, render_head_home};
pub use resolve::{resolve_for_home, resolve_for_item};

use chrono::{DateTime, SecondsFormat, Utc};

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn iso_datetime(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
