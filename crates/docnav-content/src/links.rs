//! Markdown file link extraction.
//!
//! Only links that point at other markdown sources (`./arrays.md`,
//! `../graphs/bfs.mdx#bfs`) are collected. URLs with a scheme, site paths
//! without a markdown extension and pure anchors are left to the client.

use std::path::{Component, Path, PathBuf};

use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::MarkdownLink;

/// Collect markdown file links from a document body.
///
/// `source` is the linking file relative to the docs root; relative targets
/// are resolved against its directory, `/`-rooted targets against the docs
/// root.
pub(crate) fn extract_markdown_links(body: &str, source: &Path) -> Vec<MarkdownLink> {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_GFM;

    Parser::new_ext(body, options)
        .filter_map(|event| match event {
            Event::Start(Tag::Link { dest_url, .. }) => Some(dest_url),
            _ => None,
        })
        .filter_map(|dest| {
            let path = markdown_target(&dest)?;
            Some(MarkdownLink {
                target: dest.to_string(),
                resolved: resolve_relative(source, path),
            })
        })
        .collect()
}

/// Path part of a link if it points at a markdown file.
fn markdown_target(dest: &str) -> Option<&str> {
    if dest.contains("://") || dest.starts_with("mailto:") {
        return None;
    }
    let path = dest.split(['#', '?']).next().unwrap_or_default();
    let is_markdown = Path::new(path)
        .extension()
        .is_some_and(|e| e == "md" || e == "mdx");
    is_markdown.then_some(path)
}

/// Resolve `target` against the directory of `source`.
///
/// Returns `None` when the path climbs above the docs root.
fn resolve_relative(source: &Path, target: &str) -> Option<PathBuf> {
    let (base, target) = match target.strip_prefix('/') {
        Some(rooted) => (PathBuf::new(), rooted),
        None => (
            source.parent().map(Path::to_path_buf).unwrap_or_default(),
            target,
        ),
    };

    let mut resolved = PathBuf::new();
    for component in base.join(target).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::ParentDir => {
                if !resolved.pop() {
                    return None;
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    Some(resolved)
}
