//! High-level client for the Tienda Mobil API.
//!
//! [`Api`] builds requests, hands them to the
//! [`HttpClient`](crate::clients::HttpClient), runs the
//! [`normalizer`](crate::clients::normalizer) over the response and maps the
//! payload into [`models`](crate::models).

use std::collections::HashMap;
use std::fmt;

use serde_json::{json, Value};

use crate::clients::{normalizer, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiKey, BaseUrl, TiendaMobilConfig};
use crate::error::TiendaMobilError;
use crate::models::{Order, OrderPreview, TiendaMobilModel};

/// A client for the Tienda Mobil order-management API.
///
/// Each method performs exactly one request/response cycle. The client keeps
/// no state between calls besides its fixed headers and base URL, so calls
/// are independent and instances with different credentials never interact.
///
/// # Example
///
/// ```rust,ignore
/// use tienda_mobil::Api;
///
/// let api = Api::new("https://tiendamobil.com.ar/api", "my-api-key")?;
///
/// for preview in api.get_pending_orders().await? {
///     let order = api.get_order(preview.id.as_deref().unwrap_or_default()).await?;
///     println!("{order}: {} items", order.items().len());
///     api.update_order_status(&order.id.unwrap_or_default()).await?;
/// }
/// ```
#[derive(Debug)]
pub struct Api {
    http_client: HttpClient,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Api>();
};

impl Api {
    /// Creates a client for `base_url` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] if the URL or the key fails validation,
    /// or if the HTTP client cannot be created.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TiendaMobilError> {
        let config = TiendaMobilConfig::builder()
            .base_url(BaseUrl::new(base_url)?)
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Self::with_config(&config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] if the HTTP client cannot be created.
    pub fn with_config(config: &TiendaMobilConfig) -> Result<Self, TiendaMobilError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn request_headers(&self) -> &HashMap<String, String> {
        self.http_client.default_headers()
    }

    /// Returns the query parameters sent with every request.
    #[must_use]
    pub const fn default_params(&self) -> &HashMap<String, String> {
        self.http_client.default_params()
    }

    /// Returns the pending orders.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] on transport failure, error status,
    /// malformed body, or a structured API error.
    pub async fn get_pending_orders(&self) -> Result<Vec<OrderPreview>, TiendaMobilError> {
        let data = self.get_pending_orders_raw().await?;
        Ok(Self::previews_from(&data))
    }

    /// Returns the pending orders as the untransformed `data` payload.
    ///
    /// # Errors
    ///
    /// Same as [`get_pending_orders`](Self::get_pending_orders).
    pub async fn get_pending_orders_raw(&self) -> Result<Value, TiendaMobilError> {
        let response = self.send(HttpMethod::Get, "orders/".to_string(), None).await?;
        normalizer::normalize(&response)
    }

    /// Returns a single order.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] on transport failure, error status,
    /// malformed body, or a structured API error.
    pub async fn get_order(&self, order_id: impl fmt::Display) -> Result<Order, TiendaMobilError> {
        let data = self.get_order_raw(order_id).await?;
        Ok(Order::from_json_document(&data, None))
    }

    /// Returns a single order as the untransformed `data` payload.
    ///
    /// # Errors
    ///
    /// Same as [`get_order`](Self::get_order).
    pub async fn get_order_raw(&self, order_id: impl fmt::Display) -> Result<Value, TiendaMobilError> {
        let path = format!("orders/{}", encode_segment(order_id));
        let response = self.send(HttpMethod::Get, path, None).await?;
        normalizer::normalize(&response)
    }

    /// Marks an order as processed.
    ///
    /// # Errors
    ///
    /// Same as [`update_resource`](Self::update_resource).
    pub async fn update_order_status(
        &self,
        order_id: impl fmt::Display,
    ) -> Result<bool, TiendaMobilError> {
        let payload = json!({"order": {"processed": true}});
        self.update_resource("orders", order_id, payload).await
    }

    /// Updates a resource with `PATCH {base}/{resource_name}/{resource_id}`.
    ///
    /// `data` is sent as the JSON body. Returns `true` when no error was
    /// raised.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaMobilError`] on transport failure, when a 422 response
    /// carries an `error`/`errors` member (or an unparseable body), and for
    /// any other 4xx/5xx status.
    pub async fn update_resource(
        &self,
        resource_name: &str,
        resource_id: impl fmt::Display,
        data: Value,
    ) -> Result<bool, TiendaMobilError> {
        let path = format!(
            "{}/{}",
            encode_segment(resource_name),
            encode_segment(resource_id)
        );
        let response = self.send(HttpMethod::Patch, path, Some(data)).await?;
        Self::check_write(&response)
    }

    /// Creates a resource with `POST {base}/{resource_name}`.
    ///
    /// # Errors
    ///
    /// Same as [`update_resource`](Self::update_resource).
    pub async fn create_resource(
        &self,
        resource_name: &str,
        data: Value,
    ) -> Result<bool, TiendaMobilError> {
        let path = encode_segment(resource_name);
        let response = self.send(HttpMethod::Post, path, Some(data)).await?;
        Self::check_write(&response)
    }

    fn previews_from(data: &Value) -> Vec<OrderPreview> {
        match data {
            Value::Array(entries) => entries
                .iter()
                .map(|entry| OrderPreview::from_json_document(entry, None))
                .collect(),
            Value::Object(object) if object.is_empty() => Vec::new(),
            other => {
                tracing::warn!(
                    "Expected a list of pending orders, got {}; treating it as empty",
                    other
                );
                Vec::new()
            }
        }
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<Value>,
    ) -> Result<HttpResponse, TiendaMobilError> {
        let mut builder = HttpRequest::builder(method, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.http_client.request(builder.build()?).await
    }

    fn check_write(response: &HttpResponse) -> Result<bool, TiendaMobilError> {
        if response.is_unprocessable() {
            normalizer::check_unprocessable(response)?;
        } else if !response.is_ok() {
            normalizer::raise_for_status(response)?;
        }
        Ok(true)
    }
}

fn encode_segment(segment: impl fmt::Display) -> String {
    urlencoding::encode(&segment.to_string()).into_owned()
}
