//! `head` entries: extra tags injected into every page's `<head>`.
//!
//! # Example
//!
//! ```toml
//! head = [
//!     ["link", { rel = "icon", href = "/asn-api/favicon.ico" }],
//!     ["script", { src = "/asn-api/analytics.js", defer = "" }, ""],
//! ]
//! ```
//!
//! Tags are emitted verbatim and in order. No base path is applied.

use serde::de::{MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::config::{ConfigDiagnostics, ConfigErrorKind, FieldPath};

/// A single `<head>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    /// Element name (`link`, `meta`, `script`).
    pub tag_name: String,
    /// Attributes, in authored order.
    pub attributes: Attributes,
    /// Inner content for elements like `<script>`.
    pub content: Option<String>,
}

/// Wire form: `[tag, attrs]` or `[tag, attrs, content]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawHeadTag {
    WithContent(String, Attributes, String),
    Bare(String, Attributes),
}

/// Attribute map that keeps authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Set an attribute, replacing an earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of attribute names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut attributes = Attributes::default();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    attributes.insert(name, value);
                }
                Ok(attributes)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

impl<'de> Deserialize<'de> for HeadTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawHeadTag::deserialize(deserializer)? {
            RawHeadTag::Bare(tag_name, attributes) => Self {
                tag_name,
                attributes,
                content: None,
            },
            RawHeadTag::WithContent(tag_name, attributes, content) => Self {
                tag_name,
                attributes,
                content: Some(content),
            },
        })
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut tuple = serializer.serialize_tuple(len)?;
        tuple.serialize_element(&self.tag_name)?;
        tuple.serialize_element(&self.attributes)?;
        if let Some(content) = &self.content {
            tuple.serialize_element(content)?;
        }
        tuple.end()
    }
}

impl HeadTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Attributes::default(),
            content: None,
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Validate tag and attribute names.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if !is_element_name(&self.tag_name) {
            diag.error_with_hint(
                ConfigErrorKind::InvalidHeadTag,
                field.index(0),
                format!("`{}` is not a valid element name", self.tag_name),
                "use a plain element name such as \"link\", \"meta\" or \"script\"",
            );
        }

        for name in self.attributes.keys() {
            if name.trim().is_empty() || name.contains(|c: char| c.is_whitespace() || c == '=') {
                diag.error(
                    ConfigErrorKind::InvalidHeadTag,
                    field.index(1).key(name),
                    format!("`{name}` is not a valid attribute name"),
                );
            }
        }
    }
}

/// ASCII letter followed by letters, digits or `-`.
fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
