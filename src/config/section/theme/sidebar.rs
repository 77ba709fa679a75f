//! `themeConfig.sidebar`: path-scoped sidebars.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.sidebar."/guide/"]]
//! text = "Getting Started"
//! items = [
//!     { text = "Introduction", link = "/guide/" },
//!     { text = "Quick Start", link = "/guide/quickstart" },
//! ]
//! ```
//!
//! Keys keep their authored order: the first sidebar declared is the first
//! one rendered, and the same goes for groups and items.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::config::{ConfigDiagnostics, ConfigErrorKind, FieldPath};

// ============================================================================
// Sidebar map
// ============================================================================

/// Ordered map from path prefix to its sidebar groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarMap(Vec<(String, Vec<SidebarGroup>)>);

impl SidebarMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sidebar. Returns `false` if the key already exists.
    pub fn insert(&mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) -> bool {
        let prefix = prefix.into();
        if self.get(&prefix).is_some() {
            return false;
        }
        self.0.push((prefix, groups));
        true
    }

    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.0
            .iter()
            .find(|(key, _)| key == prefix)
            .map(|(_, groups)| groups.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarGroup])> {
        self.0.iter().map(|(key, groups)| (key.as_str(), groups.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate keys, groups and items.
    ///
    /// `field` points at the map itself (`themeConfig.sidebar`).
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        for (key, groups) in self.iter() {
            let key_field = field.key(key);
            validate_key(key, &key_field, diag);

            for (i, group) in groups.iter().enumerate() {
                group.validate(&key_field.index(i), diag);
            }
        }
    }
}

/// Structural key checks. Base-path placement is checked during resolution.
fn validate_key(key: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if !key.starts_with('/') {
        diag.error_with_hint(
            ConfigErrorKind::InvalidSidebarKey,
            field.clone(),
            "sidebar key must start with `/`",
            format!("use \"/{}\"", key.trim_start_matches('/')),
        );
    } else if key.contains(['?', '#']) {
        diag.error(
            ConfigErrorKind::InvalidSidebarKey,
            field.clone(),
            "sidebar key must be a plain path prefix without `?` or `#`",
        );
    }
}

impl FromIterator<(String, Vec<SidebarGroup>)> for SidebarMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<SidebarGroup>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, groups) in iter {
            map.insert(key, groups);
        }
        map
    }
}

impl Serialize for SidebarMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, groups) in &self.0 {
            map.serialize_entry(key, groups)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SidebarMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SidebarMapVisitor;

        impl<'de> Visitor<'de> for SidebarMapVisitor {
            type Value = SidebarMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from path prefix to a list of sidebar groups")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = SidebarMap::new();
                while let Some(key) = access.next_key::<String>()? {
                    let groups = access.next_value::<Vec<SidebarGroup>>()?;
                    if !map.insert(key.clone(), groups) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate sidebar key `{key}`"
                        )));
                    }
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(SidebarMapVisitor)
    }
}

// ============================================================================
// Groups and items
// ============================================================================

/// Heading over an ordered list of pages. Has no page of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Heading text. Omit for an untitled group.
    #[serde(rename = "text", alias = "label", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Initial collapse state; `None` means not collapsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,

    pub items: Vec<SidebarItem>,
}

impl SidebarGroup {
    pub fn new(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            label: Some(label.into()),
            collapsed: None,
            items,
        }
    }

    fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(label) = &self.label
            && label.trim().is_empty()
        {
            diag.error_with_hint(
                ConfigErrorKind::EmptyLabel,
                field.field("text"),
                "sidebar group label is empty",
                "omit `text` for an untitled group",
            );
        }

        if self.items.is_empty() {
            diag.error_with_hint(
                ConfigErrorKind::EmptySidebarGroup,
                field.field("items"),
                format!(
                    "sidebar group {} has no items",
                    self.label.as_deref().unwrap_or("(untitled)")
                ),
                "add at least one page or remove the group",
            );
        }

        for (i, item) in self.items.iter().enumerate() {
            if item.label.trim().is_empty() {
                diag.error(
                    ConfigErrorKind::EmptyLabel,
                    field.field("items").index(i).field("text"),
                    "sidebar item has an empty label",
                );
            }
        }
    }
}

/// Sidebar leaf: one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    #[serde(rename = "text", alias = "label")]
    pub label: String,

    #[serde(rename = "link", alias = "target")]
    pub target: String,
}

impl SidebarItem {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_preserves_key_order() {
        let config = test_parse_config(
            r#"[themeConfig.sidebar]
"/guide/" = [{ text = "Getting Started", items = [{ text = "Intro", link = "/guide/" }] }]
"/api/" = [{ text = "API", items = [{ text = "Overview", link = "/api/" }] }]
"/architecture/" = [{ text = "Architecture", items = [{ text = "Overview", link = "/architecture/" }] }]
"#,
        );
        let keys: Vec<_> = config.theme.sidebar.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["/guide/", "/api/", "/architecture/"]);
    }

    #[test]
    fn test_parse_group_without_text() {
        let config = test_parse_config(
            r#"[[themeConfig.sidebar."/guide/"]]
collapsed = true
items = [{ label = "Intro", target = "/guide/" }]
"#,
        );
        let groups = config.theme.sidebar.get("/guide/").unwrap();
        assert_eq!(groups[0].label, None);
        assert_eq!(groups[0].collapsed, Some(true));
        assert_eq!(groups[0].items[0], SidebarItem::new("Intro", "/guide/"));
    }

    #[test]
    fn test_json_duplicate_key_rejected() {
        let json = r#"{"/guide/": [], "/guide/": []}"#;
        let err = serde_json::from_str::<SidebarMap>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate sidebar key"));
    }

    #[test]
    fn test_serialize_in_authored_order() {
        let map: SidebarMap = [
            ("/z/".to_string(), vec![]),
            ("/a/".to_string(), vec![]),
        ]
        .into_iter()
        .collect();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"/z/":[],"/a/":[]}"#);
    }

    #[test]
    fn test_validate_key_without_leading_slash() {
        let mut map = SidebarMap::new();
        map.insert(
            "guide/",
            vec![SidebarGroup::new("G", vec![SidebarItem::new("A", "/guide/a")])],
        );

        let mut diag = ConfigDiagnostics::new();
        map.validate(&FieldPath::new("themeConfig").field("sidebar"), &mut diag);
        assert_eq!(diag.len(), 1);
        let err = &diag.errors()[0];
        assert_eq!(err.kind, ConfigErrorKind::InvalidSidebarKey);
        assert_eq!(err.field.as_str(), r#"themeConfig.sidebar["guide/"]"#);
        assert_eq!(err.hint.as_deref(), Some("use \"/guide/\""));
    }

    #[test]
    fn test_validate_empty_group() {
        let mut map = SidebarMap::new();
        map.insert("/guide/", vec![SidebarGroup::new("Concepts", vec![])]);

        let mut diag = ConfigDiagnostics::new();
        map.validate(&FieldPath::new("themeConfig").field("sidebar"), &mut diag);
        assert!(diag.has_kind(ConfigErrorKind::EmptySidebarGroup));
        assert_eq!(
            diag.errors()[0].field.as_str(),
            r#"themeConfig.sidebar["/guide/"][0].items"#
        );
    }

    #[test]
    fn test_validate_blank_labels() {
        let mut group = SidebarGroup::new(" ", vec![SidebarItem::new("", "/guide/a")]);
        group.collapsed = Some(false);
        let mut map = SidebarMap::new();
        map.insert("/guide/", vec![group]);

        let mut diag = ConfigDiagnostics::new();
        map.validate(&FieldPath::new("themeConfig").field("sidebar"), &mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors().iter().all(|e| e.kind == ConfigErrorKind::EmptyLabel));
    }
}
