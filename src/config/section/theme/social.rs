//! `themeConfig.socialLinks`: icon links in the nav bar.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, ConfigErrorKind, FieldPath};

/// Known social icon providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Github,
    Twitter,
    X,
    Discord,
    Mastodon,
    Linkedin,
    Youtube,
    Facebook,
    Instagram,
    Slack,
    Npm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(rename = "icon", alias = "provider")]
    pub provider: SocialProvider,

    #[serde(rename = "link", alias = "url")]
    pub url: String,

    /// Accessible name; renderers fall back to the provider name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

impl SocialLink {
    pub fn new(provider: SocialProvider, url: impl Into<String>) -> Self {
        Self {
            provider,
            url: url.into(),
            aria_label: None,
        }
    }

    /// Social links must be absolute `http(s)` URLs with a host.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        let field = field.field("link");
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        ConfigErrorKind::InvalidSocialLink,
                        field,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://github.com/your-org",
                    );
                } else if parsed.host_str().is_none_or(str::is_empty) {
                    diag.error(
                        ConfigErrorKind::InvalidSocialLink,
                        field,
                        "URL must have a valid host",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    ConfigErrorKind::InvalidSocialLink,
                    field,
                    format!("invalid URL '{}': {e}", self.url),
                    "use format like https://github.com/your-org",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_icon_link() {
        let config = test_parse_config(
            r#"[[themeConfig.socialLinks]]
icon = "github"
link = "https://github.com/your-org/asn-risk-platform"
ariaLabel = "Source"
"#,
        );
        let link = &config.theme.social_links[0];
        assert_eq!(link.provider, SocialProvider::Github);
        assert_eq!(link.aria_label.as_deref(), Some("Source"));
    }

    #[test]
    fn test_unknown_provider_is_parse_error() {
        let result = crate::config::SiteConfig::from_toml_str(
            "title = \"T\"\n[[themeConfig.socialLinks]]\nicon = \"myspace\"\nlink = \"https://x.y\"",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_url() {
        let field = FieldPath::new("themeConfig").field("socialLinks").index(0);
        let check = |url: &str| {
            let mut diag = ConfigDiagnostics::new();
            SocialLink::new(SocialProvider::Discord, url).validate(&field, &mut diag);
            diag.len()
        };

        assert_eq!(check("https://discord.gg/invite"), 0);
        assert_eq!(check("http://example.com"), 0);
        assert_eq!(check("/community"), 1);
        assert_eq!(check("ftp://example.com"), 1);
        assert_eq!(check("mailto:team@example.com"), 1);
    }
}
