//! Per-document metadata for routed pages.
//!
//! Previous/next links follow the flattened sidebar order and never cross
//! from one sidebar into another.

use docnav_content::ContentSet;
use docnav_sidebar::Sidebars;
use serde::Serialize;

use crate::RouteGenerator;

/// Link to a neighboring document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub title: String,
    pub permalink: String,
}

/// Metadata of one routed document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocMetadata {
    pub id: String,
    pub title: String,
    pub sidebar_label: String,
    pub permalink: String,
    pub source: String,
    pub sidebar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<NavLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NavLink>,
}

/// Inputs for edit links.
#[derive(Debug, Default, Clone)]
pub struct MetadataOptions {
    /// Repository URL prefix, e.g. `https://github.com/org/repo/tree/main/`.
    pub edit_url: Option<String>,
    /// Docs directory relative to the repository root (e.g. `docs`).
    pub docs_dir: String,
}

/// Build metadata for every document reachable from `sidebars`.
///
/// Documents missing from `content` are skipped; callers decide beforehand
/// whether that is an error.
pub fn build_doc_metadata(
    sidebars: &Sidebars,
    content: &ContentSet,
    generator: &RouteGenerator,
    options: &MetadataOptions,
) -> Vec<DocMetadata> {
    let mut all = Vec::new();

    for sidebar in sidebars {
        let docs: Vec<_> = sidebar
            .doc_refs()
            .into_iter()
            .filter_map(|r| content.get(r.id).map(|doc| (r, doc)))
            .collect();

        let links: Vec<NavLink> = docs
            .iter()
            .map(|(_, doc)| NavLink {
                title: doc.title.clone(),
                permalink: generator.permalink(&doc.slug),
            })
            .collect();

        for (i, (doc_ref, doc)) in docs.iter().enumerate() {
            let source = doc.source.to_string_lossy().replace('\\', "/");
            let label = doc_ref
                .label
                .map_or_else(|| doc.sidebar_label().to_owned(), str::to_owned);
            all.push(DocMetadata {
                id: doc.id.clone(),
                title: doc.title.clone(),
                sidebar_label: label,
                permalink: links[i].permalink.clone(),
                edit_url: options
                    .edit_url
                    .as_deref()
                    .map(|base| edit_link(base, &options.docs_dir, &source)),
                source,
                sidebar: sidebar.name.clone(),
                previous: i.checked_sub(1).map(|p| links[p].clone()),
                next: links.get(i + 1).cloned(),
            });
        }
    }

    all
}

fn edit_link(base: &str, docs_dir: &str, source: &str) -> String {
    let base = base.trim_end_matches('/');
    let docs_dir = docs_dir.trim_matches('/');
    if docs_dir.is_empty() {
        format!("{base}/{source}")
    } else {
        format!("{base}/{docs_dir}/{source}")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use docnav_content::{ContentDoc, FrontMatter};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::RouteOptions;

    fn doc(id: &str) -> ContentDoc {
        ContentDoc {
            id: id.to_owned(),
            source: PathBuf::from(format!("{id}.md")),
            slug: format!("/{id}"),
            title: format!("T {id}"),
            front_matter: FrontMatter::default(),
            links: Vec::new(),
        }
    }

    fn build(options: &MetadataOptions) -> Vec<DocMetadata> {
        let sidebars = Sidebars::from_yaml_str(
            r"
dsa:
  - intro
  - type: category
    label: Data Structures
    items:
      - arrays
      - type: doc
        id: trees
        label: Trees!
practice: [exercises]
",
        )
        .unwrap();
        let content = ContentSet::new(vec![
            doc("intro"),
            doc("arrays"),
            doc("trees"),
            doc("exercises"),
        ])
        .unwrap();
        let generator = RouteGenerator::new(RouteOptions {
            base_url: "/notes/".to_owned(),
            ..Default::default()
        });
        build_doc_metadata(&sidebars, &content, &generator, options)
    }

    #[test]
    fn test_previous_next_within_sidebar() {
        let meta = build(&MetadataOptions::default());
        let ids: Vec<_> = meta.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "arrays", "trees", "exercises"]);

        assert_eq!(meta[0].previous, None);
        assert_eq!(
            meta[0].next,
            Some(NavLink {
                title: "T arrays".to_owned(),
                permalink: "/notes/arrays".to_owned(),
            })
        );
        assert_eq!(meta[2].previous.as_ref().unwrap().permalink, "/notes/arrays");
        assert_eq!(meta[2].next, None);

        // practice sidebar is separate
        assert_eq!(meta[3].sidebar, "practice");
        assert_eq!(meta[3].previous, None);
        assert_eq!(meta[3].next, None);
    }

    #[test]
    fn test_labels_and_permalinks() {
        let meta = build(&MetadataOptions::default());
        assert_eq!(meta[1].sidebar_label, "T arrays");
        assert_eq!(meta[2].sidebar_label, "Trees!");
        assert_eq!(meta[2].permalink, "/notes/trees");
        assert!(meta.iter().all(|m| m.edit_url.is_none()));
    }

    #[test]
    fn test_edit_urls() {
        let meta = build(&MetadataOptions {
            edit_url: Some("https://github.com/org/dsa-notes/tree/main/".to_owned()),
            docs_dir: "docs".to_owned(),
        });
        assert_eq!(
            meta[0].edit_url.as_deref(),
            Some("https://github.com/org/dsa-notes/tree/main/docs/intro.md")
        );
    }

    #[test]
    fn test_edit_link_without_docs_dir() {
        assert_eq!(edit_link("https://x/", "", "a/b.md"), "https://x/a/b.md");
    }
}
