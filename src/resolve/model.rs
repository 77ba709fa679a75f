//! Resolved site configuration handed to the renderer.
//!
//! Every internal link here already carries the base path, and every route
//! has exactly one position in [`RouteTable`]. Values are immutable once
//! produced; callers share them by reference.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::route::RouteTable;
use crate::config::{FieldPath, Footer, HeadTag, SocialLink};
use crate::core::{BasePath, ResolvedLink};
use crate::utils::hash;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSiteConfig {
    pub title: String,
    pub description: String,
    pub base: BasePath,
    /// Emitted verbatim, in order.
    pub head: Vec<HeadTag>,
    pub theme: ResolvedTheme,
    pub routes: RouteTable,
    /// When true, internal links were not checked and may be unreachable.
    pub ignore_dead_links: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub logo: Option<ResolvedLink>,
    pub nav: Vec<ResolvedNavItem>,
    /// Sidebars in authored order.
    pub sidebar: Vec<ResolvedSidebar>,
    pub social_links: Vec<SocialLink>,
    pub footer: Option<Footer>,
    pub search: ResolvedSearch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNavItem {
    pub label: String,
    pub link: ResolvedLink,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSidebar {
    /// Key as authored (`/guide/`).
    pub key: String,
    /// Base-applied prefix (`/asn-api/guide/`).
    pub prefix: String,
    pub groups: Vec<ResolvedSidebarGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSidebarGroup {
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    pub items: Vec<ResolvedSidebarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSidebarItem {
    pub label: String,
    pub link: ResolvedLink,
}

/// Search provider with the fields it requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ResolvedSearch {
    Local {
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        options: Map<String, Value>,
    },
    Algolia {
        app_id: String,
        api_key: String,
        index_name: String,
        /// Remaining DocSearch options, passed through.
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        options: Map<String, Value>,
    },
    #[default]
    None,
}

impl ResolvedSearch {
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl ResolvedSidebar {
    /// Field path of this sidebar in the source config.
    pub fn field(&self) -> FieldPath {
        FieldPath::new("themeConfig").field("sidebar").key(&self.key)
    }

    /// Items in declared order, with their source field paths.
    pub fn items(&self) -> impl Iterator<Item = (FieldPath, &ResolvedSidebarGroup, &ResolvedSidebarItem)> {
        let field = self.field();
        self.groups.iter().enumerate().flat_map(move |(g, group)| {
            let group_field = field.index(g).field("items");
            group
                .items
                .iter()
                .enumerate()
                .map(move |(i, item)| (group_field.index(i).field("link"), group, item))
        })
    }
}

impl ResolvedSiteConfig {
    /// Every nav and sidebar link with its source field path, in config order.
    ///
    /// This is the link set an external checker re-validates when the
    /// built-in check was skipped.
    pub fn links(&self) -> Vec<(FieldPath, &ResolvedLink)> {
        let nav = FieldPath::new("themeConfig").field("nav");
        let mut links: Vec<_> = self
            .theme
            .nav
            .iter()
            .enumerate()
            .map(|(i, item)| (nav.index(i).field("link"), &item.link))
            .collect();

        for sidebar in &self.theme.sidebar {
            links.extend(sidebar.items().map(|(field, _, item)| (field, &item.link)));
        }
        links
    }

    /// Sidebar shown for a route: the longest matching prefix wins.
    ///
    /// Prefixes match whole segments, so `/guide` covers `/guide/setup`
    /// but not `/guidebook/`.
    pub fn sidebar_for(&self, route: &str) -> Option<&ResolvedSidebar> {
        self.theme
            .sidebar
            .iter()
            .filter(|s| covers(&s.prefix, route))
            .max_by_key(|s| s.prefix.len())
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// blake3 digest of the canonical JSON form, for renderer caches.
    ///
    /// Identical input configs give identical fingerprints.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        Ok(hash::fingerprint(&serde_json::to_vec(self)?))
    }
}

fn covers(prefix: &str, route: &str) -> bool {
    route
        .strip_prefix(prefix)
        .is_some_and(|rest| prefix.ends_with('/') || rest.is_empty() || rest.starts_with('/'))
}
