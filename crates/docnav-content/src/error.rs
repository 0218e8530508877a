//! Content error types.

use std::path::PathBuf;

/// Error while discovering content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Source directory does not exist.
    #[error("Docs directory not found: {}", .0.display())]
    SourceDirNotFound(PathBuf),
    /// I/O error reading a file or directory.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Invalid include/exclude glob.
    #[error("Invalid content pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    /// Front matter is not valid YAML.
    #[error("Invalid front matter in {}: {message}", path.display())]
    FrontMatter { path: PathBuf, message: String },
    /// Two files resolve to the same document id.
    #[error("Duplicate document id '{id}': {} and {}", first.display(), second.display())]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
    /// Two documents resolve to the same slug.
    #[error("Documents '{first}' and '{second}' share the slug '{slug}'")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}
