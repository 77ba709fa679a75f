//! Base path handling.
//!
//! The base path is the URL segment a site is served from (`/asn-api/`).
//! Every internal link is resolved against it exactly once.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::link::{
    collapse_separators, is_external_link, resolve_dot_segments, route_key, split_path_suffix,
};

/// Validated base path.
///
/// Invariants:
/// - Starts and ends with `/`
/// - No repeated separators, no `.`/`..` segments
/// - No scheme, query or fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BasePath(String);

/// Why a base path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasePathError {
    Empty,
    MissingLeadingSlash,
    MissingTrailingSlash,
    HasScheme,
    HasQueryOrFragment,
    DotSegment,
}

impl fmt::Display for BasePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "base path is empty",
            Self::MissingLeadingSlash => "base path must start with `/`",
            Self::MissingTrailingSlash => "base path must end with `/`",
            Self::HasScheme => "base path must be a path, not a URL",
            Self::HasQueryOrFragment => "base path must not contain `?` or `#`",
            Self::DotSegment => "base path must not contain `.` or `..` segments",
        })
    }
}

impl std::error::Error for BasePathError {}

/// Why an internal target could not be placed under the base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    Empty,
    FragmentOnly,
    EscapesRoot,
    OutsideBase,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "link is empty",
            Self::FragmentOnly => "link has no path, only a query or fragment",
            Self::EscapesRoot => "link climbs above the site root with `..`",
            Self::OutsideBase => "link resolves outside the base path",
        })
    }
}

/// A link after base-path resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolvedLink {
    /// Site page. `href` keeps query and fragment, `route` is the page identity.
    Internal { href: String, route: String },
    /// Absolute URL, passed through unchanged.
    External { url: String },
}

impl ResolvedLink {
    /// The string a renderer should emit.
    pub fn href(&self) -> &str {
        match self {
            Self::Internal { href, .. } => href,
            Self::External { url } => url,
        }
    }

    /// Route key for internal links.
    pub fn route(&self) -> Option<&str> {
        match self {
            Self::Internal { route, .. } => Some(route),
            Self::External { .. } => None,
        }
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

impl BasePath {
    /// Parse a base path, collapsing accidental repeated separators.
    pub fn parse(raw: &str) -> Result<Self, BasePathError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(BasePathError::Empty);
        }

        // Collapse first: `//asn-api/` is a typo here, not a protocol-relative URL
        let path = collapse_separators(raw);
        if is_external_link(&path) {
            return Err(BasePathError::HasScheme);
        }
        if path.contains(['?', '#']) {
            return Err(BasePathError::HasQueryOrFragment);
        }
        if !path.starts_with('/') {
            return Err(BasePathError::MissingLeadingSlash);
        }
        if !path.ends_with('/') {
            return Err(BasePathError::MissingTrailingSlash);
        }
        if path.split('/').any(|s| s == "." || s == "..") {
            return Err(BasePathError::DotSegment);
        }
        Ok(Self(path))
    }

    /// Base path with both separators added, for error hints.
    pub fn suggest(raw: &str) -> String {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", collapse_separators(trimmed))
        }
    }

    /// The site root `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Check if a path already lives under the base (`/asn-api` counts too).
    pub fn is_rooted(&self, path: &str) -> bool {
        path.starts_with(self.as_str()) || path == self.0.trim_end_matches('/')
    }

    /// Resolve an internal path against the base, without classification.
    ///
    /// - Already base-rooted paths are kept (resolution is idempotent)
    /// - `/x` is site-absolute: becomes `{base}x`
    /// - `x` is base-relative: becomes `{base}x`
    fn join(&self, path: &str) -> Result<String, TargetError> {
        let path = collapse_separators(path);
        let joined = if self.is_rooted(&path) {
            if path.len() < self.0.len() {
                self.0.clone()
            } else {
                path
            }
        } else {
            format!("{}{}", self.0, path.trim_start_matches('/'))
        };

        let normalized = resolve_dot_segments(&joined).ok_or(TargetError::EscapesRoot)?;
        if normalized.starts_with(self.as_str()) {
            Ok(normalized)
        } else {
            Err(TargetError::OutsideBase)
        }
    }

    /// Resolve a nav/sidebar/logo target.
    ///
    /// # Examples
    /// ```
    /// use docsite::core::{BasePath, ResolvedLink};
    ///
    /// let base = BasePath::parse("/asn-api/").unwrap();
    /// let link = base.resolve("/guide/quickstart").unwrap();
    /// assert_eq!(link.href(), "/asn-api/guide/quickstart");
    ///
    /// // Already prefixed: no double prefixing
    /// assert_eq!(base.resolve(link.href()).unwrap(), link);
    /// ```
    pub fn resolve(&self, target: &str) -> Result<ResolvedLink, TargetError> {
        let target = target.trim();
        if target.is_empty() {
            return Err(TargetError::Empty);
        }
        if is_external_link(target) {
            return Ok(ResolvedLink::External {
                url: target.to_string(),
            });
        }

        let (path, suffix) = split_path_suffix(target);
        if path.is_empty() {
            return Err(TargetError::FragmentOnly);
        }

        let resolved = self.join(path)?;
        Ok(ResolvedLink::Internal {
            route: route_key(&resolved),
            href: format!("{resolved}{suffix}"),
        })
    }

    /// Resolve a sidebar prefix key (`/guide/`) to its base-applied form.
    ///
    /// Keys must be site-absolute and carry no query or fragment.
    pub fn resolve_prefix(&self, key: &str) -> Result<String, TargetError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(TargetError::Empty);
        }
        self.join(key)
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BasePath {
    type Error = BasePathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BasePath> for String {
    fn from(base: BasePath) -> Self {
        base.0
    }
}
