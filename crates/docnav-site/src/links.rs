//! Broken link detection and policy handling.

use std::fmt;

use docnav_config::{NavbarItem, ReportingPolicy};
use docnav_content::ContentSet;
use docnav_routes::{RouteManifest, join_url};
use docnav_sidebar::Sidebars;
use serde::Serialize;

use crate::SiteError;

/// Which policy governs a broken link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BrokenLinkKind {
    /// Sidebar entry or navbar target without a page (`on_broken_links`).
    Link,
    /// In-content link to a missing markdown file (`on_broken_markdown_links`).
    MarkdownLink,
}

impl fmt::Display for BrokenLinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link => f.write_str("broken link"),
            Self::MarkdownLink => f.write_str("broken markdown link"),
        }
    }
}

/// A link whose target does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    pub kind: BrokenLinkKind,
    /// Where the link was found (e.g. `sidebar 'dsa'`, `navbar`, `arrays.md`).
    pub source: String,
    /// Link target as written.
    pub target: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Sidebar doc entries with no content page.
pub(crate) fn sidebar_links(sidebars: &Sidebars, content: &ContentSet) -> Vec<BrokenLink> {
    sidebars
        .doc_refs()
        .into_iter()
        .filter(|r| content.get(r.id).is_none())
        .map(|r| BrokenLink {
            kind: BrokenLinkKind::Link,
            source: format!("sidebar '{}'", r.sidebar),
            target: r.id.to_owned(),
        })
        .collect()
}

/// Markdown links whose resolved file is not a scanned document.
pub(crate) fn markdown_links(content: &ContentSet) -> Vec<BrokenLink> {
    content
        .iter()
        .flat_map(|doc| {
            doc.links
                .iter()
                .filter(|link| {
                    link.resolved
                        .as_deref()
                        .is_none_or(|path| content.by_source(path).is_none())
                })
                .map(|link| BrokenLink {
                    kind: BrokenLinkKind::MarkdownLink,
                    source: doc.source.to_string_lossy().replace('\\', "/"),
                    target: link.target.clone(),
                })
        })
        .collect()
}

/// Navbar `to` targets that match no exact route.
pub(crate) fn navbar_links(
    items: &[NavbarItem],
    base_url: &str,
    manifest: &RouteManifest,
) -> Vec<BrokenLink> {
    items
        .iter()
        .filter_map(|item| item.to.as_deref())
        .filter(|to| manifest.find_exact(&join_url(&[base_url, to])).is_none())
        .map(|to| BrokenLink {
            kind: BrokenLinkKind::Link,
            source: "navbar".to_owned(),
            target: to.to_owned(),
        })
        .collect()
}

/// Apply `policy` to `links`.
///
/// Returns the links that were tolerated (`warn` or `ignore`).
pub(crate) fn enforce(
    policy: ReportingPolicy,
    kind: BrokenLinkKind,
    links: Vec<BrokenLink>,
) -> Result<Vec<BrokenLink>, SiteError> {
    if links.is_empty() {
        return Ok(links);
    }

    match policy {
        ReportingPolicy::Throw => Err(SiteError::BrokenLinks { kind, links }),
        ReportingPolicy::Warn => {
            for link in &links {
                tracing::warn!(
                    kind = %kind,
                    source = %link.source,
                    target = %link.target,
                    "Broken link"
                );
            }
            Ok(links)
        }
        ReportingPolicy::Ignore => {
            tracing::debug!(kind = %kind, count = links.len(), "Ignoring broken links");
            Ok(links)
        }
    }
}
