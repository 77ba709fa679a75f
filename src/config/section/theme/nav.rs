//! `themeConfig.nav`: top navigation bar.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Guide"
//! link = "/guide/"
//! activeMatch = "^/guide/"
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, ConfigErrorKind, FieldPath};

/// Nav bar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display text.
    #[serde(rename = "text", alias = "label")]
    pub label: String,

    /// Internal route or external URL.
    #[serde(rename = "link", alias = "target")]
    pub target: String,

    /// Regex over the current route that marks this item active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            active_match: None,
        }
    }

    /// Validate label and `activeMatch` pattern.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.label.trim().is_empty() {
            diag.error(
                ConfigErrorKind::EmptyLabel,
                field.field("text"),
                "nav item has an empty label",
            );
        }

        if let Some(pattern) = &self.active_match
            && let Err(e) = Regex::new(pattern)
        {
            diag.error_with_hint(
                ConfigErrorKind::InvalidActiveMatch,
                field.field("activeMatch"),
                format!("invalid regular expression: {e}"),
                "escape literal characters, e.g. \"^/api/\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_text_link() {
        let config = test_parse_config(
            r#"[[themeConfig.nav]]
text = "Guide"
link = "/guide/"
activeMatch = "^/guide/"
"#,
        );
        let nav = &config.theme.nav;
        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].label, "Guide");
        assert_eq!(nav[0].target, "/guide/");
        assert_eq!(nav[0].active_match.as_deref(), Some("^/guide/"));
    }

    #[test]
    fn test_parse_label_target_aliases() {
        let config = test_parse_config(
            r#"[[themeConfig.nav]]
label = "API Reference"
target = "/api/"
"#,
        );
        assert_eq!(config.theme.nav[0], NavItem::new("API Reference", "/api/"));
    }

    #[test]
    fn test_validate() {
        let field = FieldPath::new("themeConfig").field("nav").index(0);

        let mut diag = ConfigDiagnostics::new();
        NavItem::new("Guide", "/guide/").validate(&field, &mut diag);
        assert!(diag.is_empty());

        let mut diag = ConfigDiagnostics::new();
        let mut item = NavItem::new("  ", "/guide/");
        item.active_match = Some("(unclosed".into());
        item.validate(&field, &mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].kind, ConfigErrorKind::EmptyLabel);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.nav[0].text");
        assert_eq!(diag.errors()[1].kind, ConfigErrorKind::InvalidActiveMatch);
    }
}
