//! Core types - pure abstractions shared across the codebase.

mod base;
mod link;

pub use base::{BasePath, BasePathError, ResolvedLink, TargetError};
pub use link::{
    collapse_separators, is_external_link, resolve_dot_segments, route_key, split_path_suffix,
};
