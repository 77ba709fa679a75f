//! Link classification and path helpers.
//!
//! - External links carry a URL scheme (`https:`, `mailto:`) or are
//!   protocol-relative (`//cdn.example.com/x`)
//! - Internal links are site paths, split into path and `?query#fragment`

use regex::Regex;
use std::sync::LazyLock;

/// `scheme:` prefix as defined by RFC 3986.
static RE_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap());

/// Check if a link is external (has a URL scheme or is protocol-relative)
///
/// # Examples
/// ```
/// use docsite::core::is_external_link;
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(is_external_link("//cdn.example.com/logo.svg"));
/// assert!(!is_external_link("/guide/"));
/// assert!(!is_external_link("./quickstart"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    let link = link.trim();
    RE_SCHEME.is_match(link) || link.starts_with("//")
}

/// Split a link into path and the `?query#fragment` suffix
///
/// # Examples
/// ```
/// use docsite::core::split_path_suffix;
/// assert_eq!(split_path_suffix("/api/?v=2#auth"), ("/api/", "?v=2#auth"));
/// assert_eq!(split_path_suffix("/about#team"), ("/about", "#team"));
/// assert_eq!(split_path_suffix("/about"), ("/about", ""));
/// ```
#[inline]
pub fn split_path_suffix(link: &str) -> (&str, &str) {
    match link.find(['?', '#']) {
        Some(pos) => link.split_at(pos),
        None => (link, ""),
    }
}

/// Collapse runs of `/` into a single separator.
pub fn collapse_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

/// Resolve `.` and `..` segments of an absolute path.
///
/// Returns `None` when `..` climbs above `/`. A trailing separator (or a
/// trailing `.`/`..` segment) is kept as a directory marker.
///
/// # Examples
/// ```
/// use docsite::core::resolve_dot_segments;
/// assert_eq!(resolve_dot_segments("/a/./b/../c").as_deref(), Some("/a/c"));
/// assert_eq!(resolve_dot_segments("/a/b/..").as_deref(), Some("/a/"));
/// assert_eq!(resolve_dot_segments("/a/../.."), None);
/// ```
pub fn resolve_dot_segments(path: &str) -> Option<String> {
    debug_assert!(path.starts_with('/'));

    let mut stack: Vec<&str> = Vec::new();
    let mut trailing_dir = false;

    for segment in path.split('/').skip(1) {
        match segment {
            "" => {}
            "." => trailing_dir = true,
            ".." => {
                stack.pop()?;
                trailing_dir = true;
            }
            _ => {
                stack.push(segment);
                trailing_dir = false;
            }
        }
    }
    if path.ends_with('/') {
        trailing_dir = true;
    }

    let mut out = String::from("/");
    out.push_str(&stack.join("/"));
    if trailing_dir && !stack.is_empty() {
        out.push('/');
    }
    Some(out)
}

/// Page identity of a resolved internal path.
///
/// Strips query and fragment, a `.md`/`.html` extension and a trailing
/// `index` segment, so `/guide/index.md` and `/guide/` name the same page.
///
/// # Examples
/// ```
/// use docsite::core::route_key;
/// assert_eq!(route_key("/asn-api/guide/quickstart.html#setup"), "/asn-api/guide/quickstart");
/// assert_eq!(route_key("/asn-api/guide/index.md"), "/asn-api/guide/");
/// assert_eq!(route_key("/asn-api/guide/"), "/asn-api/guide/");
/// ```
pub fn route_key(path: &str) -> String {
    let (path, _) = split_path_suffix(path);
    let path = path
        .strip_suffix(".md")
        .or_else(|| path.strip_suffix(".html"))
        .unwrap_or(path);

    match path.strip_suffix("index") {
        Some(dir) if dir.ends_with('/') => dir.to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("https://github.com/your-org/asn-risk-platform"));
        assert!(is_external_link("tel:+123"));
        assert!(is_external_link("git+ssh://host/repo"));
        assert!(!is_external_link("/api/authentication"));
        assert!(!is_external_link("api/authentication"));
        assert!(!is_external_link(":no-scheme"));
        assert!(!is_external_link("1http://x"));
        assert!(!is_external_link(""));
    }

    #[test]
    fn test_collapse_separators() {
        assert_eq!(collapse_separators("//asn-api///guide/"), "/asn-api/guide/");
        assert_eq!(collapse_separators("/"), "/");
        assert_eq!(collapse_separators("a//b"), "a/b");
    }

    #[test]
    fn test_resolve_dot_segments() {
        assert_eq!(resolve_dot_segments("/").as_deref(), Some("/"));
        assert_eq!(resolve_dot_segments("/guide/").as_deref(), Some("/guide/"));
        assert_eq!(
            resolve_dot_segments("/guide/quickstart").as_deref(),
            Some("/guide/quickstart")
        );
        assert_eq!(resolve_dot_segments("/guide/.").as_deref(), Some("/guide/"));
        assert_eq!(resolve_dot_segments("/guide/../api/").as_deref(), Some("/api/"));
        assert_eq!(resolve_dot_segments("/..").as_deref(), None);
        assert_eq!(resolve_dot_segments("/a/..").as_deref(), Some("/"));
    }

    #[test]
    fn test_route_key_variants() {
        assert_eq!(route_key("/api/"), "/api/");
        assert_eq!(route_key("/api/index"), "/api/");
        assert_eq!(route_key("/api/index.html"), "/api/");
        assert_eq!(route_key("/api/schema?tab=json"), "/api/schema");
        assert_eq!(route_key("/api/reindex"), "/api/reindex");
    }
}
