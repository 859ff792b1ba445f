//! Validated newtype wrappers for configuration values.
//!
//! Values are checked on construction so an [`Api`](crate::Api) can never be
//! built from an empty credential or a base URL without a scheme and host.

use std::fmt;

use crate::error::TiendaMobilError;

/// A validated Tienda Mobil API key.
///
/// The key is sent as `Authorization: Token token=<key>`. Its value is masked
/// in `Debug` output so it does not leak into logs.
///
/// # Example
///
/// ```rust
/// use tienda_mobil::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, TiendaMobilError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(TiendaMobilError::new(
                "API key cannot be empty. Please provide a valid Tienda Mobil API key.",
            ));
        }
        Ok(Self(key))
    }

    /// Returns the value of the `Authorization` header for this key.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Token token={}", self.0)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL for the API, e.g. `https://tiendamobil.com.ar/api`.
///
/// Surrounding whitespace and trailing slashes are removed so endpoint paths
/// can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use tienda_mobil::BaseUrl;
///
/// let url = BaseUrl::new("https://tiendamobil.com.ar/api/").unwrap();
/// assert_eq!(url.as_ref(), "https://tiendamobil.com.ar/api");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "tiendamobil.com.ar");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] if the URL has no alphabetic scheme
    /// followed by `://`, or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, TiendaMobilError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || {
            TiendaMobilError::new(format!(
                "Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://tiendamobil.com.ar/api')."
            ))
        };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
