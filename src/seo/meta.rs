use super::resolve::ResolvedMetadata;

/// Which head element a plain meta record renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKind {
    /// `<meta name="..." content="...">`
    Name,
    /// `<link rel="..." href="...">`
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaRecord {
    pub kind: MetaKind,
    pub key: String,
    pub value: String,
}

/// Plain meta records in output order: description, canonical, robots.
/// Empty values produce no record at all.
pub fn assemble_plain_meta(resolved: &ResolvedMetadata) -> Vec<MetaRecord> {
    let mut records = Vec::new();

    if !resolved.description.is_empty() {
        records.push(MetaRecord {
            kind: MetaKind::Name,
            key: "description".to_string(),
            value: resolved.description.clone(),
        });
    }

    if !resolved.canonical.is_empty() {
        records.push(MetaRecord {
            kind: MetaKind::Link,
            key: "canonical".to_string(),
            value: resolved.canonical.clone(),
        });
    }

    if !resolved.robots.is_empty() {
        let directives = resolved
            .robots
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        records.push(MetaRecord {
            kind: MetaKind::Name,
            key: "robots".to_string(),
            value: directives,
        });
    }

    records
}
