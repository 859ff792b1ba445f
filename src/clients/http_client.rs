//! HTTP client for Tienda Mobil API communication.
//!
//! This module provides the [`HttpClient`] type, the adapter between the
//! [`Api`](crate::Api) and the `reqwest` transport.

use std::collections::HashMap;

use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::TiendaMobilConfig;
use crate::error::TiendaMobilError;

/// Media type negotiated with the API through the `Accept` header.
pub const API_MEDIA_TYPE: &str = "application/vnd.api.v1";

/// HTTP client for making requests to the Tienda Mobil API.
///
/// The client owns the fixed request headers (`Accept`, `Content-Type`,
/// `User-Agent` and `Authorization`) and performs exactly one
/// request/response cycle per call. It never retries and never inspects the
/// status code: only transport failures are reported as errors here, every
/// completed exchange is handed back as an [`HttpResponse`].
///
/// # Example
///
/// ```rust,ignore
/// use tienda_mobil::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "orders/").build()?;
/// let response = client.request(request).await?;
/// println!("{} {}", response.code, response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    default_headers: HashMap<String, String>,
    default_params: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] if the underlying `reqwest` client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &TiendaMobilConfig) -> Result<Self, TiendaMobilError> {
        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), API_MEDIA_TYPE.to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), config.user_agent().to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.api_key().authorization_header(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            TiendaMobilError::new(format!("Failed to create HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            default_params: config.default_params().clone(),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the query parameters sent with every request.
    #[must_use]
    pub const fn default_params(&self) -> &HashMap<String, String> {
        &self.default_params
    }

    /// Builds the absolute URL for a path relative to the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a request and returns the completed exchange.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] if the request fails validation, or if
    /// the transport fails before a full response is read (connection
    /// refused, DNS failure, timeout, ...). Error statuses are **not** errors
    /// at this layer.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TiendaMobilError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !self.default_params.is_empty() {
            req_builder = req_builder.query(&self.default_params);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        tracing::debug!("Sending {} request to {}", request.http_method, url);

        let res = req_builder
            .send()
            .await
            .map_err(|e| TiendaMobilError::connection(&e))?;

        let code = res.status().as_u16();
        let res_url = res.url().to_string();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res
            .text()
            .await
            .map_err(|e| TiendaMobilError::connection(&e))?;

        let response = HttpResponse::new(code, res_url, res_headers, body);
        tracing::debug!(
            "Received status {} from {} (request id: {})",
            response.code,
            response.url,
            response.request_id().unwrap_or("none")
        );

        Ok(response)
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
