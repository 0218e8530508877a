//! YAML front matter parsing.

use serde::Deserialize;

/// Recognized front matter fields. Unknown fields are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    /// Replaces the file-name part of the document id.
    pub id: Option<String>,
    /// URL slug; absolute when it starts with `/`, else relative to the directory.
    pub slug: Option<String>,
    /// Page title.
    pub title: Option<String>,
    /// Label used in the sidebar instead of the title.
    pub sidebar_label: Option<String>,
}

/// Split a markdown source into front matter and body.
///
/// Front matter is a `---` line at the very start, YAML, then a closing `---`
/// line. Without an opening fence, or without a closing one, the whole
/// source is body.
///
/// # Errors
///
/// Returns the YAML error message when the block does not parse.
pub(crate) fn split_front_matter(source: &str) -> Result<(FrontMatter, &str), String> {
    let Some(rest) = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    else {
        return Ok((FrontMatter::default(), source));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((parse_yaml(yaml)?, body));
        }
        offset += line.len();
    }

    Ok((FrontMatter::default(), source))
}

fn parse_yaml(yaml: &str) -> Result<FrontMatter, String> {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(trimmed).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_front_matter() {
        let (fm, body) = split_front_matter("# Arrays\n\nText").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "# Arrays\n\nText");
    }

    #[test]
    fn test_fields() {
        let source = "---\nid: arr\nslug: /arrays-101\ntitle: \"Arrays\"\nsidebar_label: Arr\ntags: [x]\n---\n# Heading\n";
        let (fm, body) = split_front_matter(source).unwrap();
        assert_eq!(fm.id.as_deref(), Some("arr"));
        assert_eq!(fm.slug.as_deref(), Some("/arrays-101"));
        assert_eq!(fm.title.as_deref(), Some("Arrays"));
        assert_eq!(fm.sidebar_label.as_deref(), Some("Arr"));
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = split_front_matter("---\n---\nbody").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_crlf_line_endings() {
        let (fm, body) = split_front_matter("---\r\ntitle: Trees\r\n---\r\nbody").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Trees"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_unclosed_block_is_body() {
        let source = "---\ntitle: Oops\nno closing fence";
        let (fm, body) = split_front_matter(source).unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, source);
    }

    #[test]
    fn test_malformed_yaml() {
        let err = split_front_matter("---\ntitle: [unclosed\n---\n").unwrap_err();
        assert!(!err.is_empty());
    }
}
