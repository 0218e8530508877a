//! Site error types.

use std::fmt::Write;
use std::path::PathBuf;

use docnav_content::ContentError;
use docnav_routes::RouteError;
use docnav_sidebar::SidebarError;

use crate::{BrokenLink, BrokenLinkKind};

/// Error building a site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Sidebar(#[from] SidebarError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Route(#[from] RouteError),

    /// Broken links found under the `throw` policy.
    #[error("{}", describe_broken(*.kind, .links))]
    BrokenLinks {
        kind: BrokenLinkKind,
        links: Vec<BrokenLink>,
    },

    /// Writing an artifact failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing an artifact failed.
    #[error("Failed to serialize {name}: {source}")]
    Serialize {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_broken(kind: BrokenLinkKind, links: &[BrokenLink]) -> String {
    let mut message = format!("Found {} {kind}(s):", links.len());
    for link in links {
        let _ = write!(message, "\n  - {link}");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_links_message_lists_all() {
        let err = SiteError::BrokenLinks {
            kind: BrokenLinkKind::Link,
            links: vec![
                BrokenLink {
                    kind: BrokenLinkKind::Link,
                    source: "sidebar 'dsa'".to_owned(),
                    target: "heaps".to_owned(),
                },
                BrokenLink {
                    kind: BrokenLinkKind::Link,
                    source: "navbar".to_owned(),
                    target: "/home".to_owned(),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Found 2 broken link(s):"));
        assert!(msg.contains("sidebar 'dsa' -> heaps"));
        assert!(msg.contains("navbar -> /home"));
    }
}
