//! `themeConfig.search`: search provider selection.
//!
//! # Example
//!
//! ```toml
//! [themeConfig.search]
//! provider = "algolia"
//!
//! [themeConfig.search.options]
//! appId = "APP"
//! apiKey = "KEY"
//! indexName = "docs"
//! ```
//!
//! Options stay an open map here so that a missing credential is reported
//! against its field. The resolved form is a closed union per provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{ConfigDiagnostics, ConfigErrorKind, FieldPath};

/// Algolia keys that must be present and non-empty.
pub const ALGOLIA_REQUIRED: [&str; 3] = ["appId", "apiKey", "indexName"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built by the renderer.
    Local,
    /// Hosted Algolia DocSearch.
    Algolia,
    /// No search box.
    #[default]
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub provider: SearchProvider,

    /// Provider-specific options.
    #[serde(alias = "providerOptions", skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl SearchConfig {
    pub fn algolia(options: Map<String, Value>) -> Self {
        Self {
            provider: SearchProvider::Algolia,
            options,
        }
    }

    /// Non-empty string option.
    pub fn credential(&self, key: &str) -> Option<&str> {
        self.options
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Check provider requirements.
    ///
    /// - `algolia`: every key in [`ALGOLIA_REQUIRED`] is a non-empty string
    /// - `local`: nothing required
    /// - `none`: options are ignored (warning if present)
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        match self.provider {
            SearchProvider::Algolia => {
                let options = field.field("options");
                for key in ALGOLIA_REQUIRED {
                    if self.credential(key).is_none() {
                        diag.error_with_hint(
                            ConfigErrorKind::MissingSearchCredentials,
                            options.field(key),
                            format!("algolia search requires a non-empty `{key}`"),
                            "copy the credentials from your DocSearch dashboard",
                        );
                    }
                }
            }
            SearchProvider::Local => {}
            SearchProvider::None => {
                if !self.options.is_empty() {
                    diag.warn(
                        field.field("options"),
                        "search provider is `none`, options are ignored",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::json;

    fn field() -> FieldPath {
        FieldPath::new("themeConfig").field("search")
    }

    fn options(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_default_is_none() {
        let config = test_parse_config("");
        assert_eq!(config.theme.search.provider, SearchProvider::None);
    }

    #[test]
    fn test_parse_algolia() {
        let config = test_parse_config(
            r#"[themeConfig.search]
provider = "algolia"
providerOptions = { appId = "APP", apiKey = "KEY", indexName = "docs" }
"#,
        );
        let search = &config.theme.search;
        assert_eq!(search.provider, SearchProvider::Algolia);
        assert_eq!(search.credential("indexName"), Some("docs"));
    }

    #[test]
    fn test_algolia_without_options_reports_each_key() {
        let mut diag = ConfigDiagnostics::new();
        SearchConfig::algolia(Map::new()).validate(&field(), &mut diag);
        assert_eq!(diag.len(), 3);
        assert!(diag
            .errors()
            .iter()
            .all(|e| e.kind == ConfigErrorKind::MissingSearchCredentials));
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "themeConfig.search.options.appId"
        );
    }

    #[test]
    fn test_algolia_blank_or_non_string_credentials() {
        let mut diag = ConfigDiagnostics::new();
        SearchConfig::algolia(options(json!({
            "appId": "APP",
            "apiKey": "  ",
            "indexName": 42,
        })))
        .validate(&field(), &mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_local_and_none() {
        let mut diag = ConfigDiagnostics::new();
        let local = SearchConfig {
            provider: SearchProvider::Local,
            options: Map::new(),
        };
        local.validate(&field(), &mut diag);
        assert!(diag.is_empty());

        let none = SearchConfig {
            provider: SearchProvider::None,
            options: options(json!({ "appId": "x" })),
        };
        none.validate(&field(), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
