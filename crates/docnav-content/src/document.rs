//! Scanned documents and the content set.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::{ContentError, FrontMatter};

/// Link from one markdown source to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLink {
    /// Destination as written in the source.
    pub target: String,
    /// Target file relative to the docs root, `None` if it leaves the root.
    pub resolved: Option<PathBuf>,
}

/// One documentation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDoc {
    /// Document id (e.g. `arrays`, `graphs/bfs`).
    pub id: String,
    /// Source file relative to the docs root.
    pub source: PathBuf,
    /// URL slug with a leading `/` (e.g. `/arrays`, `/` for the home page).
    pub slug: String,
    /// Page title.
    pub title: String,
    /// Parsed front matter.
    pub front_matter: FrontMatter,
    /// Links to other markdown sources, in document order.
    pub links: Vec<MarkdownLink>,
}

impl ContentDoc {
    /// Label for sidebar entries: `sidebar_label`, else the title.
    pub fn sidebar_label(&self) -> &str {
        self.front_matter
            .sidebar_label
            .as_deref()
            .unwrap_or(&self.title)
    }
}

/// All documents of a site, ordered by id.
#[derive(Debug, Default)]
pub struct ContentSet {
    docs: Vec<ContentDoc>,
    by_id: HashMap<String, usize>,
    by_source: HashMap<PathBuf, usize>,
}

impl ContentSet {
    /// Build the set, rejecting ambiguous ids and slugs.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::DuplicateId`] or [`ContentError::DuplicateSlug`].
    pub fn new(docs: Vec<ContentDoc>) -> Result<Self, ContentError> {
        let mut sorted: BTreeMap<String, ContentDoc> = BTreeMap::new();
        for doc in docs {
            if let Some(existing) = sorted.get(&doc.id) {
                return Err(ContentError::DuplicateId {
                    id: doc.id.clone(),
                    first: existing.source.clone(),
                    second: doc.source,
                });
            }
            sorted.insert(doc.id.clone(), doc);
        }
        let docs: Vec<ContentDoc> = sorted.into_values().collect();

        let mut slugs: HashMap<&str, &str> = HashMap::new();
        for doc in &docs {
            if let Some(first) = slugs.insert(&doc.slug, &doc.id) {
                return Err(ContentError::DuplicateSlug {
                    slug: doc.slug.clone(),
                    first: first.to_owned(),
                    second: doc.id.clone(),
                });
            }
        }

        let by_id = docs
            .iter()
            .enumerate()
            .map(|(i, doc)| (doc.id.clone(), i))
            .collect();
        let by_source = docs
            .iter()
            .enumerate()
            .map(|(i, doc)| (doc.source.clone(), i))
            .collect();

        Ok(Self {
            docs,
            by_id,
            by_source,
        })
    }

    /// Look up a document by id.
    pub fn get(&self, id: &str) -> Option<&ContentDoc> {
        self.by_id.get(id).map(|&i| &self.docs[i])
    }

    /// Look up a document by its source path relative to the docs root.
    pub fn by_source(&self, source: &Path) -> Option<&ContentDoc> {
        self.by_source.get(source).map(|&i| &self.docs[i])
    }

    /// Iterate documents ordered by id.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentDoc> {
        self.docs.iter()
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True when no document was found.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContentSet {
    type Item = &'a ContentDoc;
    type IntoIter = std::slice::Iter<'a, ContentDoc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
