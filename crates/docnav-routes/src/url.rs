//! URL path joining.

/// Join URL path parts with single slashes and a leading `/`.
///
/// A trailing slash is kept only if the last part has one and the result is
/// not the bare root.
///
/// ```
/// use docnav_routes::join_url;
///
/// assert_eq!(join_url(&["/", "/", "/intro"]), "/intro");
/// assert_eq!(join_url(&["/markdown-web-app/", "/"]), "/markdown-web-app/");
/// assert_eq!(join_url(&["/markdown-web-app/", "/", "/arrays"]), "/markdown-web-app/arrays");
/// ```
pub fn join_url(parts: &[&str]) -> String {
    let segments: Vec<&str> = parts
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|s| !s.is_empty())
        .collect();

    let mut url = format!("/{}", segments.join("/"));
    let trailing = parts.last().is_some_and(|p| p.ends_with('/'));
    if trailing && url != "/" {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url(&[]), "/");
        assert_eq!(join_url(&["/"]), "/");
        assert_eq!(join_url(&["/", "/docs"]), "/docs");
        assert_eq!(join_url(&["/", "/docs", "/graphs/bfs"]), "/docs/graphs/bfs");
        assert_eq!(join_url(&["/base//", "//x/"]), "/base/x/");
    }
}
