//! Document id and slug derivation.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::FrontMatter;

/// Ordering prefix such as `01-`, `2_` or `3. ` followed by a real name.
static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*[-_.]+\s*([^-_.\s].*)$").unwrap());

/// File stems that stand for their directory.
const INDEX_STEMS: [&str; 2] = ["index", "readme"];

/// Remove an ordering prefix from a path segment.
///
/// Segments that are only a number (`2024`) or have nothing after the
/// separator are returned unchanged.
///
/// ```
/// use docnav_content::strip_number_prefix;
///
/// assert_eq!(strip_number_prefix("01-arrays"), "arrays");
/// assert_eq!(strip_number_prefix("2024"), "2024");
/// ```
pub fn strip_number_prefix(segment: &str) -> &str {
    NUMBER_PREFIX_RE
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .map_or(segment, |m| m.as_str())
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// ```
/// use docnav_content::titlecase_from_slug;
///
/// assert_eq!(titlecase_from_slug("linked-list"), "Linked List");
/// assert_eq!(titlecase_from_slug("hash_tables"), "Hash Tables");
/// ```
pub fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Document id and slug for a source file relative to the docs root.
pub(crate) fn derive_id_and_slug(rel_path: &Path, front_matter: &FrontMatter) -> (String, String) {
    let dirs: Vec<&str> = rel_path
        .parent()
        .into_iter()
        .flat_map(Path::iter)
        .filter_map(|c| c.to_str())
        .map(strip_number_prefix)
        .collect();
    let dir_part = dirs.join("/");

    let stem = rel_path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(strip_number_prefix)
        .unwrap_or_default();
    let base_name = front_matter.id.as_deref().unwrap_or(stem);

    let id = join_segments(&dir_part, base_name);

    let slug = match front_matter.slug.as_deref() {
        Some(slug) if slug.starts_with('/') => normalize_slug(slug),
        Some(slug) => normalize_slug(&format!("/{dir_part}/{slug}")),
        None if front_matter.id.is_none()
            && INDEX_STEMS.contains(&stem.to_lowercase().as_str()) =>
        {
            normalize_slug(&format!("/{dir_part}"))
        }
        None => normalize_slug(&format!("/{id}")),
    };

    (id, slug)
}

fn join_segments(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_owned()
    } else {
        format!("{dir}/{name}")
    }
}

/// Collapse repeated slashes and drop the trailing slash (except for `/`).
pub(crate) fn normalize_slug(slug: &str) -> String {
    let segments: Vec<&str> = slug.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
