//! HTTP plumbing for Tienda Mobil API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: executes one request/response cycle over `reqwest`
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: a request to send
//! - [`HttpResponse`]: a completed exchange (status, URL, headers, raw body)
//! - [`HttpMethod`]: GET, POST and PATCH
//! - [`normalizer`]: turns an [`HttpResponse`] into a `data` payload or a
//!   [`TiendaMobilError`](crate::TiendaMobilError)
//!
//! Most callers use [`Api`](crate::Api) instead of these types directly.

mod http_client;
mod http_request;
mod http_response;
pub mod normalizer;

pub use http_client::{HttpClient, API_MEDIA_TYPE};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, UNPROCESSABLE_ENTITY};
