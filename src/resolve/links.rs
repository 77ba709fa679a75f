//! Dead-link check: every internal nav and sidebar link must land on a page.
//!
//! A link is live when its route is in the route table, or when it is the
//! prefix of a sidebar (the section landing page, e.g. `/asn-api/guide/`).

use rustc_hash::FxHashSet;

use super::model::ResolvedSiteConfig;
use crate::config::{ConfigDiagnostics, ConfigErrorKind};

pub(super) fn check_dead_links(resolved: &ResolvedSiteConfig, diag: &mut ConfigDiagnostics) {
    let prefixes: FxHashSet<&str> = resolved
        .theme
        .sidebar
        .iter()
        .map(|s| s.prefix.as_str())
        .collect();

    for (field, link) in resolved.links() {
        let Some(route) = link.route() else {
            continue;
        };
        if resolved.routes.contains(route) || prefixes.contains(route) {
            continue;
        }

        diag.error_with_hint(
            ConfigErrorKind::DeadLink,
            field,
            format!("`{}` does not match any sidebar page", link.href()),
            "add the page to a sidebar, or set `ignoreDeadLinks = true`",
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ConfigErrorKind;
    use crate::resolve::test_resolve;

    const SIDEBAR: &str = r#"
[[themeConfig.sidebar."/guide/"]]
text = "Guide"
items = [{ text = "Quick Start", link = "/guide/quickstart" }]
"#;

    #[test]
    fn test_nav_to_page_and_prefix_is_live() {
        let config = format!(
            r#"
[[themeConfig.nav]]
text = "Guide"
link = "/guide/"

[[themeConfig.nav]]
text = "Start"
link = "/guide/quickstart#install"

[[themeConfig.nav]]
text = "GitHub"
link = "https://github.com/your-org"
{SIDEBAR}"#
        );
        assert!(test_resolve(&config).is_ok());
    }

    #[test]
    fn test_nav_to_unknown_route_is_dead() {
        let config = format!(
            r#"
[[themeConfig.nav]]
text = "API"
link = "/api/"
{SIDEBAR}"#
        );
        let err = test_resolve(&config).unwrap_err();
        assert_eq!(err.kinds(), [ConfigErrorKind::DeadLink]);
        assert_eq!(
            err.diagnostics().unwrap().errors()[0].field.as_str(),
            "themeConfig.nav[0].link"
        );
    }

    #[test]
    fn test_dead_links_ignored() {
        let config = format!(
            r#"
ignoreDeadLinks = true

[[themeConfig.nav]]
text = "API"
link = "/api/"
{SIDEBAR}"#
        );
        let resolved = test_resolve(&config).unwrap();
        assert!(resolved.ignore_dead_links);
        assert_eq!(resolved.theme.nav[0].link.href(), "/api/");
    }
}
