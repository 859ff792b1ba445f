//! HTTP request types for the Tienda Mobil API client.
//!
//! This module provides the [`HttpRequest`] type and its builder.

use std::fmt;

use crate::error::TiendaMobilError;

/// HTTP methods used by the Tienda Mobil API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Retrieve a resource or a collection.
    Get,
    /// Create a resource.
    Post,
    /// Partially update a resource.
    Patch,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Patch => write!(f, "PATCH"),
        }
    }
}

/// A request to be sent to the Tienda Mobil API.
///
/// `path` is relative to the configured base URL (no leading slash).
///
/// # Example
///
/// ```rust
/// use tienda_mobil::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "orders/")
///     .build()
///     .unwrap();
///
/// let patch_request = HttpRequest::builder(HttpMethod::Patch, "orders/42")
///     .body(json!({"order": {"processed": true}}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the base URL.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] if `http_method` is `Post` or `Patch` but
    /// `body` is `None`.
    pub fn verify(&self) -> Result<(), TiendaMobilError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Patch) && self.body.is_none()
        {
            return Err(TiendaMobilError::new(format!(
                "Cannot use {} without specifying data.",
                self.http_method
            )));
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, TiendaMobilError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
