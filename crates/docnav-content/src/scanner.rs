//! Document discovery by filesystem walking.
//!
//! The walk is sorted by file name at every level so the resulting content
//! set, and everything generated from it, does not depend on directory
//! iteration order.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::frontmatter::split_front_matter;
use crate::links::extract_markdown_links;
use crate::slug::{derive_id_and_slug, titlecase_from_slug};
use crate::{ContentDoc, ContentError, ContentSet};

/// Which files count as content.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Glob patterns (relative to the docs root) selecting content files.
    pub include: Vec<String>,
    /// Glob patterns removing files from the selection.
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include: vec!["**/*.md".to_owned(), "**/*.mdx".to_owned()],
            exclude: Vec::new(),
        }
    }
}

/// Discovers content documents under a docs directory.
pub struct Scanner {
    source_dir: PathBuf,
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl Scanner {
    /// Create a scanner for `source_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Pattern`] if a glob pattern is invalid.
    pub fn new(source_dir: PathBuf, options: &ScanOptions) -> Result<Self, ContentError> {
        Ok(Self {
            source_dir,
            include: compile_patterns(&options.include)?,
            exclude: compile_patterns(&options.exclude)?,
        })
    }

    /// Scan the docs directory and build the content set.
    ///
    /// Hidden entries (`.name`) and partials (`_name`) are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing or unreadable, a file has
    /// malformed front matter, or two files collide on id or slug.
    pub fn scan(&self) -> Result<ContentSet, ContentError> {
        if !self.source_dir.is_dir() {
            return Err(ContentError::SourceDirNotFound(self.source_dir.clone()));
        }

        let mut files = Vec::new();
        self.collect_files(&self.source_dir, &mut files)?;

        let docs = files
            .iter()
            .map(|rel_path| self.load_document(rel_path))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            source_dir = %self.source_dir.display(),
            documents = docs.len(),
            "Content scan completed"
        );

        ContentSet::new(docs)
    }

    /// Collect content file paths relative to the docs root, depth-first.
    fn collect_files(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ContentError> {
        let io_err = |source| ContentError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = fs::read_dir(dir)
            .map_err(io_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(io_err)?;
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            let path = entry.path();
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                self.collect_files(&path, files)?;
            } else if let Ok(rel_path) = path.strip_prefix(&self.source_dir)
                && self.is_selected(rel_path)
            {
                files.push(rel_path.to_path_buf());
            }
        }

        Ok(())
    }

    fn is_selected(&self, rel_path: &Path) -> bool {
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };
        self.include
            .iter()
            .any(|p| p.matches_path_with(rel_path, options))
            && !self
                .exclude
                .iter()
                .any(|p| p.matches_path_with(rel_path, options))
    }

    fn load_document(&self, rel_path: &Path) -> Result<ContentDoc, ContentError> {
        let path = self.source_dir.join(rel_path);
        let source = fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;

        let (front_matter, body) = split_front_matter(&source)
            .map_err(|message| ContentError::FrontMatter { path, message })?;

        let (id, slug) = derive_id_and_slug(rel_path, &front_matter);
        let title = front_matter
            .title
            .clone()
            .or_else(|| extract_h1(body))
            .unwrap_or_else(|| {
                let last = id.rsplit('/').next().unwrap_or(&id);
                titlecase_from_slug(last)
            });
        let links = extract_markdown_links(body, rel_path);

        Ok(ContentDoc {
            id,
            source: rel_path.to_path_buf(),
            slug,
            title,
            front_matter,
            links,
        })
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, ContentError> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| ContentError::Pattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Text of the first non-empty level-1 heading.
///
/// Headings are taken from the markdown event stream, so `#` lines inside
/// code blocks never count.
fn extract_h1(body: &str) -> Option<String> {
    let mut title: Option<String> = None;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => title = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(title) = title.as_mut() {
                    title.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                if let Some(text) = title.take()
                    && !text.trim().is_empty()
                {
                    return Some(text.trim().to_owned());
                }
            }
            _ => {}
        }
    }

    None
}
