//! `themeConfig` section.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! logo = "/logo.svg"
//!
//! [[themeConfig.nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[themeConfig.sidebar."/guide/"]]
//! text = "Getting Started"
//! items = [{ text = "Quick Start", link = "/guide/quickstart" }]
//!
//! [[themeConfig.socialLinks]]
//! icon = "github"
//! link = "https://github.com/your-org/asn-risk-platform"
//!
//! [themeConfig.footer]
//! message = "ASN Risk Intelligence Platform"
//! copyright = "Copyright 2026"
//!
//! [themeConfig.search]
//! provider = "local"
//! ```

mod nav;
mod search;
mod sidebar;
mod social;

pub use nav::NavItem;
pub use search::{ALGOLIA_REQUIRED, SearchConfig, SearchProvider};
pub use sidebar::{SidebarGroup, SidebarItem, SidebarMap};
pub use social::{SocialLink, SocialProvider};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme settings consumed by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Logo image path or URL.
    #[serde(rename = "logo", skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,

    /// Top navigation bar.
    pub nav: Vec<NavItem>,

    /// Path prefix -> sidebar groups.
    pub sidebar: SidebarMap,

    pub social_links: Vec<SocialLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,

    pub search: SearchConfig,

    /// Skip the dead-link check (also accepted at the top level).
    pub ignore_dead_links: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}

impl ThemeConfig {
    /// Structural checks for every theme entry.
    ///
    /// Link targets are checked during resolution, where the base path is known.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        let nav = field.field("nav");
        for (i, item) in self.nav.iter().enumerate() {
            item.validate(&nav.index(i), diag);
        }

        self.sidebar.validate(&field.field("sidebar"), diag);

        let social = field.field("socialLinks");
        for (i, link) in self.social_links.iter().enumerate() {
            link.validate(&social.index(i), diag);
        }

        self.search.validate(&field.field("search"), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let theme = &config.theme;
        assert!(theme.logo_path.is_none());
        assert!(theme.nav.is_empty());
        assert!(theme.sidebar.is_empty());
        assert!(theme.social_links.is_empty());
        assert!(theme.footer.is_none());
        assert_eq!(theme.search.provider, SearchProvider::None);
        assert!(!theme.ignore_dead_links);
    }

    #[test]
    fn test_footer_and_logo() {
        let config = test_parse_config(
            r#"[themeConfig]
logo = "/logo.svg"
ignoreDeadLinks = true

[themeConfig.footer]
message = "ASN Risk Intelligence Platform"
copyright = "Copyright 2026"
"#,
        );
        let theme = &config.theme;
        assert_eq!(theme.logo_path.as_deref(), Some("/logo.svg"));
        assert!(theme.ignore_dead_links);
        assert_eq!(
            theme.footer,
            Some(Footer {
                message: "ASN Risk Intelligence Platform".into(),
                copyright: "Copyright 2026".into(),
            })
        );
    }

    #[test]
    fn test_validate_collects_across_entries() {
        let mut theme = ThemeConfig::default();
        theme.nav.push(NavItem::new("", "/guide/"));
        theme.social_links.push(SocialLink::new(SocialProvider::Github, "github.com"));
        theme.search = SearchConfig::algolia(Default::default());

        let mut diag = ConfigDiagnostics::new();
        theme.validate(&FieldPath::new("themeConfig"), &mut diag);
        // empty label + bad social URL + 3 missing credentials
        assert_eq!(diag.len(), 5);
    }
}
