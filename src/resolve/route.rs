//! Route table: every sidebar page, keyed by route.
//!
//! Positions count pages per sidebar prefix in declared order, starting at
//! 0. A renderer derives "previous page / next page" links from them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::ResolvedSidebar;
use crate::config::{ConfigDiagnostics, ConfigErrorKind, FieldPath};

/// Where a route sits in the sidebar structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Base-applied prefix of the owning sidebar.
    pub prefix: String,
    /// Label of the enclosing group; `None` for untitled groups.
    pub group: Option<String>,
    /// Index among this prefix's pages.
    pub position: usize,
    /// Sidebar item label.
    pub label: String,
}

/// Previous and next page within one sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub prev: Option<&'a str>,
    pub next: Option<&'a str>,
}

/// Route -> entry, ordered by route for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable(BTreeMap<String, RouteEntry>);

impl RouteTable {
    /// Flatten sidebars into a route table.
    ///
    /// A route claimed twice is a `DuplicateRoute` error, unless
    /// `tolerate_duplicates` is set: then the first claim wins and the
    /// duplicate is recorded as a warning without taking a position.
    pub fn build(
        sidebars: &[ResolvedSidebar],
        tolerate_duplicates: bool,
        diag: &mut ConfigDiagnostics,
    ) -> Self {
        let mut table = Self::default();
        let mut claimed: FxHashMap<&str, FieldPath> = FxHashMap::default();

        for sidebar in sidebars {
            let mut position = 0;

            for (field, group, item) in sidebar.items() {
                let Some(route) = item.link.route() else {
                    continue;
                };

                if let Some(first) = claimed.get(route) {
                    let message = format!(
                        "route `{route}` is already the target of `{}`",
                        first.as_str()
                    );
                    if tolerate_duplicates {
                        diag.warn(field, message);
                    } else {
                        diag.error_with_hint(
                            ConfigErrorKind::DuplicateRoute,
                            field,
                            message,
                            "each page may appear once in the sidebars",
                        );
                    }
                    continue;
                }

                table.0.insert(
                    route.to_string(),
                    RouteEntry {
                        prefix: sidebar.prefix.clone(),
                        group: group.label.clone(),
                        position,
                        label: item.label.clone(),
                    },
                );
                claimed.insert(route, field);
                position += 1;
            }
        }

        table
    }

    pub fn get(&self, route: &str) -> Option<&RouteEntry> {
        self.0.get(route)
    }

    pub fn contains(&self, route: &str) -> bool {
        self.0.contains_key(route)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.0.iter().map(|(route, entry)| (route.as_str(), entry))
    }

    /// Routes of one sidebar prefix, in position order.
    pub fn sequence(&self, prefix: &str) -> Vec<(&str, &RouteEntry)> {
        let mut routes: Vec<_> = self.iter().filter(|(_, e)| e.prefix == prefix).collect();
        routes.sort_by_key(|(_, e)| e.position);
        routes
    }

    /// Previous/next page for a route, within its own sidebar.
    pub fn neighbors(&self, route: &str) -> Neighbors<'_> {
        let Some(entry) = self.get(route) else {
            return Neighbors::default();
        };

        let sequence = self.sequence(&entry.prefix);
        let at = entry.position;
        Neighbors {
            prev: at
                .checked_sub(1)
                .and_then(|i| sequence.get(i))
                .map(|(r, _)| *r),
            next: sequence.get(at + 1).map(|(r, _)| *r),
        }
    }
}
