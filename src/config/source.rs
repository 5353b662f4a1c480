use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Base URL shipped in the generated config file. A source still pointing
/// here has not been set up.
pub const PLACEHOLDER_BASE_URL: &str = "https://your-wordpress-site.com";

pub const BASE_URL_ENV: &str = "PRESSWIRE_BASE_URL";
pub const SITE_ENV: &str = "PRESSWIRE_SITE";

static SOURCE: OnceLock<SourceConfig> = OnceLock::new();

/// Where content comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Root of the WordPress REST API, e.g. `https://public-api.wordpress.com`
    pub base_url: Option<String>,
    /// Site identifier used by the posts endpoint
    pub site: Option<String>,
}

impl SourceConfig {
    pub fn new(base_url: impl Into<String>, site: Option<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            site,
        }
    }

    pub fn is_configured(&self) -> bool {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) => !url.is_empty() && url != PLACEHOLDER_BASE_URL,
            None => false,
        }
    }

    /// Base URL without a trailing slash, if configured.
    pub fn base_url(&self) -> Option<&str> {
        if self.is_configured() {
            self.base_url
                .as_deref()
                .map(|url| url.trim().trim_end_matches('/'))
        } else {
            None
        }
    }

    pub fn site(&self) -> Option<&str> {
        self.site.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Overlay `PRESSWIRE_BASE_URL` / `PRESSWIRE_SITE` when they are set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            self.base_url = Some(url);
        }
        if let Ok(site) = std::env::var(SITE_ENV) {
            self.site = Some(site);
        }
        self
    }

    /// Install the process-wide source. Only the first call wins; returns
    /// whether this call did the installing.
    pub fn install(self) -> bool {
        let installed = SOURCE.set(self).is_ok();
        if !installed {
            tracing::debug!("Source config already resolved, ignoring later value");
        }
        installed
    }

    /// The process-wide source, resolved from the environment on first use
    /// if nothing was installed.
    pub fn global() -> &'static SourceConfig {
        SOURCE.get_or_init(|| SourceConfig::default().with_env_overrides())
    }
}

/// Whether the process-wide content source is usable.
pub fn is_configured() -> bool {
    SourceConfig::global().is_configured()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_base_url_is_not_configured() {
        assert!(!SourceConfig::default().is_configured());
    }

    #[test]
    fn test_empty_base_url_is_not_configured() {
        assert!(!SourceConfig::new("", None).is_configured());
        assert!(!SourceConfig::new("   ", None).is_configured());
    }

    #[test]
    fn test_placeholder_is_not_configured() {
        assert!(!SourceConfig::new(PLACEHOLDER_BASE_URL, None).is_configured());
    }

    #[test]
    fn test_real_url_is_configured() {
        let source = SourceConfig::new("https://blog.example.com", None);
        assert!(source.is_configured());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let source = SourceConfig::new("https://blog.example.com/", None);
        assert_eq!(source.base_url(), Some("https://blog.example.com"));
        assert_eq!(SourceConfig::default().base_url(), None);
    }

    #[test]
    fn test_blank_site_is_absent() {
        let source = SourceConfig::new("https://x.test", Some(" ".into()));
        assert_eq!(source.site(), None);
    }

    #[test]
    fn test_install_only_once() {
        // The first install may have happened elsewhere in this test binary,
        // so only the second outcome is deterministic.
        SourceConfig::new("https://first.test", None).install();
        let before = SourceConfig::global().clone();
        assert!(!SourceConfig::new("https://second.test", None).install());
        assert_eq!(SourceConfig::global(), &before);
    }
}
