//! Config field paths for diagnostics.

use owo_colors::{Stream, Style};
use std::fmt;

use crate::logger::paint;

/// Location of a value inside the site config, as an author would write it.
///
/// Built incrementally while walking the config so every diagnostic can point
/// at the exact entry that failed.
///
/// # Example
///
/// ```
/// use docsite::config::FieldPath;
///
/// let path = FieldPath::new("themeConfig")
///     .field("sidebar")
///     .key("/guide/")
///     .index(0)
///     .field("items")
///     .index(2);
/// assert_eq!(path.as_str(), r#"themeConfig.sidebar["/guide/"][0].items[2]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Append a named field (`parent.name`).
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Append a sequence index (`parent[3]`).
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// Append a quoted map key (`parent["/guide/"]`).
    pub fn key(&self, key: &str) -> Self {
        Self(format!("{}[{key:?}]", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = format!("`{}`", self.0);
        f.write_str(&paint(path, Stream::Stderr, Style::new().bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
