//! Site configuration model and loading.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # head tags
//! │   └── theme/     # themeConfig: nav, sidebar, socialLinks, footer, search
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key               | Purpose                                          |
//! |-------------------|--------------------------------------------------|
//! | `title`           | Site title (required)                            |
//! | `description`     | Site description                                 |
//! | `base`            | Base path the site is served from (default `/`)  |
//! | `head`            | Extra `<head>` tags                              |
//! | `ignoreDeadLinks` | Skip the dead-link check                         |
//! | `themeConfig`     | Logo, nav, sidebars, social links, footer, search|
//!
//! Keys are camelCase so a VitePress-style config literal maps over as-is.

pub mod section;
pub mod types;
mod util;

pub use section::{
    ALGOLIA_REQUIRED, Attributes, Footer, HeadTag, NavItem, SearchConfig, SearchProvider, SidebarGroup,
    SidebarItem, SidebarMap, SocialLink, SocialProvider, ThemeConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigErrorKind, FieldPath};
pub use util::{ConfigFormat, expand_tilde, find_config_file, find_config_file_from};

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::log;

// ============================================================================
// root configuration
// ============================================================================

/// Raw site configuration, as authored.
///
/// Holds no derived state. Turn it into a `ResolvedSiteConfig` with
/// [`crate::resolve::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,

    pub description: String,

    /// Base path; `None` means `/`.
    #[serde(rename = "base", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    #[serde(rename = "head")]
    pub head_tags: Vec<HeadTag>,

    /// Top-level switch, as in the source literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_dead_links: Option<bool>,

    #[serde(rename = "themeConfig", alias = "theme")]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse content, collecting any unknown fields.
    pub fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let collect = |path: serde_ignored::Path| ignored.push(path.to_string());

        let config = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, collect)?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config = serde_ignored::deserialize(&mut deserializer, collect)?;
                deserializer.end()?;
                config
            }
        };
        Ok((config, ignored))
    }

    /// Read and parse a config file, returning unknown field paths.
    ///
    /// Format is chosen by extension: `.toml` or `.json`.
    pub fn from_path(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse_with_ignored(&content, format)
    }

    /// Load a config file and warn about unknown fields.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::from_path(path)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Replace the base path, e.g. for a per-environment build.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base_path = Some(base.into());
        self
    }

    /// Whether the dead-link check is disabled at either level.
    pub fn ignores_dead_links(&self) -> bool {
        self.ignore_dead_links.unwrap_or(false) || self.theme.ignore_dead_links
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Structural validation of everything that does not depend on the base path.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let root = FieldPath::new("");

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                ConfigErrorKind::EmptyLabel,
                root.field("title"),
                "site title is empty",
                "set `title`, e.g. \"ASN Risk Platform\"",
            );
        }

        let head = root.field("head");
        for (i, tag) in self.head_tags.iter().enumerate() {
            tag.validate(&head.index(i), diag);
        }

        self.theme.validate(&root.field("themeConfig"), diag);
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal required `title`.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config, ConfigFormat::Toml).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = SiteConfig::from_toml_str("[themeConfig\ntitle = \"Docs\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "");
        assert!(config.base_path.is_none());
        assert!(config.head_tags.is_empty());
        assert!(!config.ignores_dead_links());
    }

    #[test]
    fn test_top_level_keys() {
        let config = test_parse_config(
            "description = \"Docs\"\nbase = \"/asn-api/\"\nignoreDeadLinks = true",
        );
        assert_eq!(config.description, "Docs");
        assert_eq!(config.base_path.as_deref(), Some("/asn-api/"));
        assert!(config.ignores_dead_links());
    }

    #[test]
    fn test_ignore_dead_links_in_theme() {
        let config = test_parse_config("[themeConfig]\nignoreDeadLinks = true");
        assert_eq!(config.ignore_dead_links, None);
        assert!(config.ignores_dead_links());
    }

    #[test]
    fn test_with_base() {
        let config = SiteConfig::default().with_base("/staging/");
        assert_eq!(config.base_path.as_deref(), Some("/staging/"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"Test\"\nbase = \"/\"\n[themeConfig]\nlogoo = \"/logo.svg\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content, ConfigFormat::Toml).unwrap();

        assert_eq!(config.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("logoo")));
    }

    #[test]
    fn test_json_source() {
        let content = r#"{
            "title": "ASN Risk Platform",
            "base": "/asn-api/",
            "head": [["link", { "rel": "icon", "href": "/asn-api/favicon.ico" }]],
            "themeConfig": {
                "nav": [{ "text": "Guide", "link": "/guide/" }],
                "search": { "provider": "local" },
                "unknownKey": 1
            }
        }"#;
        let (config, ignored) = SiteConfig::parse_with_ignored(content, ConfigFormat::Json).unwrap();
        assert_eq!(config.head_tags[0].tag_name, "link");
        assert_eq!(config.theme.nav[0].target, "/guide/");
        assert_eq!(config.theme.search.provider, SearchProvider::Local);
        assert_eq!(ignored, ["themeConfig.unknownKey"]);

        assert_eq!(SiteConfig::from_json_str(content).unwrap(), config);
    }

    #[test]
    fn test_json_trailing_garbage() {
        let result = SiteConfig::parse_with_ignored("{} x", ConfigFormat::Json);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("docsite.toml");
        fs::write(&toml_path, "title = \"Docs\"").unwrap();
        let (config, ignored) = SiteConfig::from_path(&toml_path).unwrap();
        assert_eq!(config.title, "Docs");
        assert!(ignored.is_empty());

        let yaml_path = dir.path().join("docsite.yaml");
        fs::write(&yaml_path, "title: Docs").unwrap();
        assert!(matches!(
            SiteConfig::from_path(&yaml_path),
            Err(ConfigError::UnsupportedFormat(_))
        ));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            SiteConfig::from_path(&missing),
            Err(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_validate_title() {
        let mut diag = ConfigDiagnostics::new();
        SiteConfig::default().validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].kind, ConfigErrorKind::EmptyLabel);
        assert_eq!(diag.errors()[0].field.as_str(), "title");
    }
}
