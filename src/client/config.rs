//! Client configuration.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Base URL of the production seller API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.backmarket.fr";

/// Locale sent in `Accept-Language` when none is configured.
pub const DEFAULT_LANGUAGE: &str = "fr-fr";

/// Configuration for the BackMarket client.
///
/// Set once at construction and never mutated afterwards. The token is
/// sent verbatim after `Basic `, so it must already be the encoded
/// credential string issued by BackMarket.
///
/// # Example
///
/// ```
/// use backmarket_rs::ApiConfig;
/// use std::time::Duration;
///
/// let config = ApiConfig::new("dGVzdDp0ZXN0", "https://www.backmarket.fr")
///     .with_user_agent("my-erp/1.0")
///     .with_language("en-gb")
///     .with_timeout(Duration::from_secs(30));
/// assert_eq!(config.language_tag(), "en-gb");
/// ```
#[derive(Clone)]
pub struct ApiConfig {
    token: SecretString,
    api_base_url: String,
    user_agent: String,
    language_tag: String,
    timeout: Option<Duration>,
}

impl ApiConfig {
    /// Create a configuration with the default user agent and language.
    pub fn new(token: impl Into<String>, api_base_url: impl Into<String>) -> Self {
        let api_base_url: String = api_base_url.into();
        Self {
            token: SecretString::from(token.into()),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            user_agent: default_user_agent(),
            language_tag: DEFAULT_LANGUAGE.to_string(),
            timeout: None,
        }
    }

    /// Build a configuration from a key/value mapping.
    ///
    /// Recognized keys are `token`, `api_endpoint`, `user_agent` and
    /// `language`. The first two are required.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self> {
        let token = map
            .get("token")
            .ok_or_else(|| Error::Config("missing `token`".to_string()))?;
        let endpoint = map
            .get("api_endpoint")
            .ok_or_else(|| Error::Config("missing `api_endpoint`".to_string()))?;

        let mut config = Self::new(token.clone(), endpoint.clone());
        if let Some(user_agent) = map.get("user_agent") {
            config = config.with_user_agent(user_agent.clone());
        }
        if let Some(language) = map.get("language") {
            config = config.with_language(language.clone());
        }
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from environment variables.
    ///
    /// | Variable | Required | Default |
    /// |---|---|---|
    /// | `BACKMARKET_TOKEN` | yes | |
    /// | `BACKMARKET_API_URL` | no | [`DEFAULT_API_BASE_URL`] |
    /// | `BACKMARKET_USER_AGENT` | no | `backmarket-rs/<version>` |
    /// | `BACKMARKET_LANGUAGE` | no | [`DEFAULT_LANGUAGE`] |
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("BACKMARKET_TOKEN")
            .map_err(|_| Error::Config("BACKMARKET_TOKEN is not set".to_string()))?;
        let base_url = std::env::var("BACKMARKET_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let mut config = Self::new(token, base_url);
        if let Ok(user_agent) = std::env::var("BACKMARKET_USER_AGENT") {
            config = config.with_user_agent(user_agent);
        }
        if let Ok(language) = std::env::var("BACKMARKET_LANGUAGE") {
            config = config.with_language(language);
        }
        config.validate()?;
        Ok(config)
    }

    /// Set the User-Agent header. BackMarket asks sellers to identify
    /// their company or ERP here.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the `Accept-Language` locale, e.g. `fr-fr` or `en-gb`.
    pub fn with_language(mut self, language_tag: impl Into<String>) -> Self {
        self.language_tag = language_tag.into();
        self
    }

    /// Set a request timeout. Unset by default, leaving the HTTP
    /// client's own default in place.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL the endpoint paths are appended to.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// User-Agent header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `Accept-Language` header value.
    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn authorization(&self) -> String {
        format!("Basic {}", self.token.expose_secret())
    }

    fn validate(&self) -> Result<()> {
        if self.token.expose_secret().is_empty() {
            return Err(Error::Config("token is empty".to_string()));
        }
        if self.api_base_url.is_empty() {
            return Err(Error::Config("API base URL is empty".to_string()));
        }
        url::Url::parse(&self.api_base_url)?;
        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("backmarket-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("user_agent", &self.user_agent)
            .field("language_tag", &self.language_tag)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::new("tok", "https://www.backmarket.fr/");
        assert_eq!(config.api_base_url(), "https://www.backmarket.fr");
        assert_eq!(config.language_tag(), DEFAULT_LANGUAGE);
        assert!(config.user_agent().starts_with("backmarket-rs/"));
        assert_eq!(config.timeout(), None);
        assert_eq!(config.authorization(), "Basic tok");
    }

    #[test]
    fn test_from_map() {
        let config = ApiConfig::from_map(&map(&[
            ("token", "abc"),
            ("api_endpoint", "https://preprod.backmarket.fr"),
            ("user_agent", "acme-erp"),
            ("language", "de-de"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url(), "https://preprod.backmarket.fr");
        assert_eq!(config.user_agent(), "acme-erp");
        assert_eq!(config.language_tag(), "de-de");
    }

    #[test]
    fn test_from_map_missing_keys() {
        let err = ApiConfig::from_map(&map(&[("api_endpoint", "https://x.test")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ApiConfig::from_map(&map(&[("token", "abc")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_map_rejects_bad_url() {
        let err = ApiConfig::from_map(&map(&[("token", "abc"), ("api_endpoint", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, Error::UrlParse(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ApiConfig::new("super-secret", "https://www.backmarket.fr");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
