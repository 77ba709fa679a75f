//! Site configuration resolution.
//!
//! Turns a raw [`SiteConfig`] into a [`ResolvedSiteConfig`]: base path
//! applied to every internal link, sidebars flattened into a route table,
//! dead links rejected.
//!
//! # Phases
//!
//! ```text
//! 1. structure   base path, labels, head tags, sidebar keys, targets, search
//! 2. routes      route table, duplicate routes
//! 3. links       dead-link check (skipped with `ignoreDeadLinks`)
//! ```
//!
//! Each phase collects every error it finds. A phase only runs when the
//! previous ones passed, so follow-on errors never bury the real cause.
//!
//! Resolution is pure and does not log.

mod links;
mod model;
mod route;

pub use model::{
    ResolvedNavItem, ResolvedSearch, ResolvedSidebar, ResolvedSidebarGroup, ResolvedSidebarItem,
    ResolvedSiteConfig, ResolvedTheme,
};
pub use route::{Neighbors, RouteEntry, RouteTable};

use rustc_hash::FxHashMap;
use serde_json::Map;

use crate::config::{
    ALGOLIA_REQUIRED, ConfigDiagnostics, ConfigError, ConfigErrorKind, FieldPath, NavItem,
    SearchConfig, SearchProvider, SidebarGroup, SiteConfig, ThemeConfig,
};
use crate::core::{BasePath, ResolvedLink};

/// Resolve a site configuration.
///
/// Warnings are dropped; use [`resolve_with_diagnostics`] to keep them.
///
/// # Examples
/// ```
/// use docsite::config::SiteConfig;
///
/// let config = SiteConfig::from_toml_str(r#"
/// title = "Docs"
/// base = "/asn-api/"
///
/// [[themeConfig.sidebar."/guide/"]]
/// text = "Guide"
/// items = [{ text = "Quick Start", link = "/guide/quickstart" }]
/// "#).unwrap();
///
/// let resolved = docsite::resolve::resolve(&config).unwrap();
/// assert!(resolved.routes.contains("/asn-api/guide/quickstart"));
/// ```
pub fn resolve(raw: &SiteConfig) -> Result<ResolvedSiteConfig, ConfigError> {
    let mut diag = ConfigDiagnostics::new();
    resolve_with_diagnostics(raw, &mut diag)
}

/// Resolve a site configuration, leaving warnings and hints in `diag`.
pub fn resolve_with_diagnostics(
    raw: &SiteConfig,
    diag: &mut ConfigDiagnostics,
) -> Result<ResolvedSiteConfig, ConfigError> {
    // Phase 1: structure
    raw.validate(diag);
    let base = resolve_base(raw.base_path.as_deref(), diag);
    let theme = resolve_theme(&raw.theme, &base, diag);
    diag.checkpoint()?;

    // Phase 2: routes
    let ignore_dead_links = raw.ignores_dead_links();
    let routes = RouteTable::build(&theme.sidebar, ignore_dead_links, diag);
    diag.checkpoint()?;

    let resolved = ResolvedSiteConfig {
        title: raw.title.clone(),
        description: raw.description.clone(),
        base,
        head: raw.head_tags.clone(),
        theme,
        routes,
        ignore_dead_links,
    };

    // Phase 3: links
    if ignore_dead_links {
        let field = if raw.ignore_dead_links.unwrap_or(false) {
            FieldPath::new("ignoreDeadLinks")
        } else {
            FieldPath::new("themeConfig").field("ignoreDeadLinks")
        };
        diag.hint(
            field,
            "dead-link check skipped, internal links may point at missing pages",
        );
    } else {
        links::check_dead_links(&resolved, diag);
    }
    diag.checkpoint()?;

    Ok(resolved)
}

/// Parse the base path. An invalid base is reported and `/` is used so
/// that targets can still be checked in the same pass.
fn resolve_base(raw: Option<&str>, diag: &mut ConfigDiagnostics) -> BasePath {
    let Some(raw) = raw else {
        return BasePath::root();
    };

    BasePath::parse(raw).unwrap_or_else(|err| {
        diag.error_with_hint(
            ConfigErrorKind::InvalidBasePath,
            FieldPath::new("base"),
            format!("`{raw}`: {err}"),
            format!("use \"{}\"", BasePath::suggest(raw)),
        );
        BasePath::root()
    })
}

fn resolve_target(
    base: &BasePath,
    target: &str,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<ResolvedLink> {
    match base.resolve(target) {
        Ok(link) => Some(link),
        Err(err) => {
            diag.error(
                ConfigErrorKind::UnresolvableTarget,
                field,
                format!("`{target}`: {err}"),
            );
            None
        }
    }
}

fn resolve_theme(theme: &ThemeConfig, base: &BasePath, diag: &mut ConfigDiagnostics) -> ResolvedTheme {
    let root = FieldPath::new("themeConfig");

    let logo = theme
        .logo_path
        .as_deref()
        .and_then(|logo| resolve_target(base, logo, root.field("logo"), diag));

    let nav_field = root.field("nav");
    let nav = theme
        .nav
        .iter()
        .enumerate()
        .filter_map(|(i, item)| resolve_nav_item(item, base, nav_field.index(i), diag))
        .collect();

    ResolvedTheme {
        logo,
        nav,
        sidebar: resolve_sidebars(theme, base, &root.field("sidebar"), diag),
        social_links: theme.social_links.clone(),
        footer: theme.footer.clone(),
        search: resolve_search(&theme.search),
    }
}

fn resolve_nav_item(
    item: &NavItem,
    base: &BasePath,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<ResolvedNavItem> {
    let link = resolve_target(base, &item.target, field.field("link"), diag)?;
    Some(ResolvedNavItem {
        label: item.label.clone(),
        link,
        active_match: item.active_match.clone(),
    })
}

fn resolve_sidebars(
    theme: &ThemeConfig,
    base: &BasePath,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Vec<ResolvedSidebar> {
    // resolved prefix -> authored key that claimed it
    let mut claimed: FxHashMap<String, &str> = FxHashMap::default();
    let mut sidebars = Vec::with_capacity(theme.sidebar.len());

    for (key, groups) in theme.sidebar.iter() {
        // Structurally invalid keys were already reported
        if !key.starts_with('/') || key.contains(['?', '#']) {
            continue;
        }
        let key_field = field.key(key);

        let prefix = match base.resolve_prefix(key) {
            Ok(prefix) => prefix,
            Err(err) => {
                diag.error(
                    ConfigErrorKind::InvalidSidebarKey,
                    key_field,
                    format!("`{key}`: {err}"),
                );
                continue;
            }
        };

        if let Some(first) = claimed.get(&prefix) {
            diag.error_with_hint(
                ConfigErrorKind::InvalidSidebarKey,
                key_field,
                format!("`{key}` resolves to `{prefix}`, same as `{first}`"),
                "merge the groups into one sidebar",
            );
            continue;
        }
        claimed.insert(prefix.clone(), key);

        let groups = groups
            .iter()
            .enumerate()
            .map(|(g, group)| resolve_group(group, base, &key_field.index(g), diag))
            .collect();

        sidebars.push(ResolvedSidebar {
            key: key.to_string(),
            prefix,
            groups,
        });
    }

    sidebars
}

fn resolve_group(
    group: &SidebarGroup,
    base: &BasePath,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> ResolvedSidebarGroup {
    let items_field = field.field("items");
    let items = group
        .items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let link = resolve_target(base, &item.target, items_field.index(i).field("link"), diag)?;
            Some(ResolvedSidebarItem {
                label: item.label.clone(),
                link,
            })
        })
        .collect();

    ResolvedSidebarGroup {
        label: group.label.clone(),
        collapsed: group.collapsed,
        items,
    }
}

/// Close the search options over the provider.
///
/// Missing Algolia credentials were reported during validation, so a
/// failed lookup here only happens on input that will be rejected.
fn resolve_search(search: &SearchConfig) -> ResolvedSearch {
    match search.provider {
        SearchProvider::None => ResolvedSearch::None,
        SearchProvider::Local => ResolvedSearch::Local {
            options: search.options.clone(),
        },
        SearchProvider::Algolia => {
            let credential = |key: &str| search.credential(key).unwrap_or_default().to_string();
            let options: Map<_, _> = search
                .options
                .iter()
                .filter(|(key, _)| !ALGOLIA_REQUIRED.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();

            ResolvedSearch::Algolia {
                app_id: credential("appId"),
                api_key: credential("apiKey"),
                index_name: credential("indexName"),
                options,
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::resolve::test_*`)
// ============================================================================

/// Resolve a TOML snippet with a minimal required `title`.
#[cfg(test)]
pub fn test_resolve(extra: &str) -> Result<ResolvedSiteConfig, ConfigError> {
    resolve(&crate::config::test_parse_config(extra))
}

// ============================================================================
// tests
// ============================================================================
