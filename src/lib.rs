//! docsite - documentation site configuration resolver.
//!
//! Loads a site config (TOML or JSON), validates it, applies the base path
//! to every internal link, and flattens the sidebars into a route table a
//! renderer can consume as-is.
//!
//! ```text
//! SiteConfig ──resolve──▶ ResolvedSiteConfig
//!   (raw)                   (base applied, routes, no dead links)
//! ```

pub mod config;
pub mod core;
pub mod logger;
pub mod resolve;
pub mod utils;

pub use config::{ConfigDiagnostics, ConfigError, ConfigErrorKind, SiteConfig};
pub use resolve::{ResolvedSiteConfig, RouteTable, resolve, resolve_with_diagnostics};
