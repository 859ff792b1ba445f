//! Configuration types for the Tienda Mobil API client.
//!
//! # Overview
//!
//! - [`TiendaMobilConfig`]: everything an [`Api`](crate::Api) needs
//! - [`TiendaMobilConfigBuilder`]: builder for [`TiendaMobilConfig`]
//! - [`ApiKey`]: a validated API key with masked debug output
//! - [`BaseUrl`]: a validated base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tienda_mobil::{ApiKey, BaseUrl, TiendaMobilConfig};
//!
//! let config = TiendaMobilConfig::builder()
//!     .base_url(BaseUrl::new("https://tiendamobil.com.ar/api").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.user_agent(), "OpenOrange API Sync 0.1");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::collections::HashMap;
use std::time::Duration;

use crate::error::TiendaMobilError;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "OpenOrange API Sync 0.1";

/// Configuration for the Tienda Mobil API client.
///
/// `TiendaMobilConfig` is `Clone`, `Send` and `Sync`; one configuration can
/// back any number of independent clients.
#[derive(Clone, Debug)]
pub struct TiendaMobilConfig {
    base_url: BaseUrl,
    api_key: ApiKey,
    user_agent: String,
    default_params: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl TiendaMobilConfig {
    /// Creates a new builder for constructing a `TiendaMobilConfig`.
    #[must_use]
    pub fn builder() -> TiendaMobilConfigBuilder {
        TiendaMobilConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the parameters appended to every request's query string.
    ///
    /// Empty unless configured; reserved for server-side directives such as
    /// rate limiting.
    #[must_use]
    pub const fn default_params(&self) -> &HashMap<String, String> {
        &self.default_params
    }

    /// Returns the request timeout handed to the transport, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TiendaMobilConfig>();
};

/// Builder for constructing [`TiendaMobilConfig`] instances.
///
/// `base_url` and `api_key` are required.
///
/// # Defaults
///
/// - `user_agent`: [`DEFAULT_USER_AGENT`]
/// - `default_params`: empty
/// - `timeout`: `None` (transport default)
#[derive(Debug, Default)]
pub struct TiendaMobilConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    user_agent: Option<String>,
    default_params: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl TiendaMobilConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Adds a single default query parameter.
    #[must_use]
    pub fn default_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_params.insert(key.into(), value.into());
        self
    }

    /// Replaces all default query parameters.
    #[must_use]
    pub fn default_params(mut self, params: HashMap<String, String>) -> Self {
        self.default_params = params;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`TiendaMobilConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] if `base_url` or `api_key` was not set.
    pub fn build(self) -> Result<TiendaMobilConfig, TiendaMobilError> {
        let base_url = self
            .base_url
            .ok_or_else(|| TiendaMobilError::missing_field("base_url"))?;
        let api_key = self
            .api_key
            .ok_or_else(|| TiendaMobilError::missing_field("api_key"))?;

        let user_agent = match self.user_agent {
            Some(user_agent) => {
                tracing::debug!(
                    "Overriding default user agent {} with {}",
                    DEFAULT_USER_AGENT,
                    user_agent
                );
                user_agent
            }
            None => DEFAULT_USER_AGENT.to_string(),
        };

        Ok(TiendaMobilConfig {
            base_url,
            api_key,
            user_agent,
            default_params: self.default_params,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        BaseUrl::new("https://tiendamobil.com.ar/api").unwrap()
    }

    fn api_key() -> ApiKey {
        ApiKey::new("test").unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = TiendaMobilConfigBuilder::new().api_key(api_key()).build();

        let error = result.unwrap_err();
        assert!(error.message().contains("'base_url'"));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = TiendaMobilConfigBuilder::new().base_url(base_url()).build();

        let error = result.unwrap_err();
        assert!(error.message().contains("'api_key'"));
    }

    #[test]
    fn test_builder_defaults() {
        let config = TiendaMobilConfig::builder()
            .base_url(base_url())
            .api_key(api_key())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://tiendamobil.com.ar/api");
        assert_eq!(config.api_key().as_ref(), "test");
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert!(config.default_params().is_empty());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_options() {
        let config = TiendaMobilConfig::builder()
            .base_url(base_url())
            .api_key(api_key())
            .user_agent("MyApp/1.0")
            .default_param("limit", "10")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.user_agent(), "MyApp/1.0");
        assert_eq!(
            config.default_params().get("limit"),
            Some(&"10".to_string())
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_default_params_replaces_previous_entries() {
        let mut params = HashMap::new();
        params.insert("b".to_string(), "2".to_string());

        let config = TiendaMobilConfig::builder()
            .base_url(base_url())
            .api_key(api_key())
            .default_param("a", "1")
            .default_params(params)
            .build()
            .unwrap();

        assert!(config.default_params().get("a").is_none());
        assert_eq!(config.default_params().get("b"), Some(&"2".to_string()));
    }
}
