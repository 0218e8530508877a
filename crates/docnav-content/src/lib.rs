//! Documentation content discovery for docnav.
//!
//! Scans a docs directory for markdown sources and derives, for each file,
//! its [`ContentDoc`]: document id, slug, title and the markdown links it
//! contains.
//!
//! # Ids and slugs
//!
//! | Source file                | Id              | Slug            |
//! |----------------------------|-----------------|-----------------|
//! | `intro.md`                 | `intro`         | `/intro`        |
//! | `01-basics/arrays.md`      | `basics/arrays` | `/basics/arrays`|
//! | `graphs/index.md`          | `graphs/index`  | `/graphs`       |
//! | `x.md` with `slug: /`      | `x`             | `/`             |
//!
//! Front matter `id` replaces the file-name part of the id.

mod document;
mod error;
mod frontmatter;
mod links;
mod scanner;
mod slug;

pub use document::{ContentDoc, ContentSet, MarkdownLink};
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use scanner::{ScanOptions, Scanner};
pub use slug::{strip_number_prefix, titlecase_from_slug};
