//! # Tienda Mobil API client
//!
//! A Rust client for the Tienda Mobil order-management API, a JSON:API
//! flavored REST service.
//!
//! ## Overview
//!
//! - [`Api`]: list pending orders, fetch an order, mark it processed, and
//!   create or update arbitrary resources
//! - [`models`]: typed [`Customer`], [`OrderItem`], [`OrderPreview`] and
//!   [`Order`] built from JSON:API documents
//! - [`TiendaMobilError`]: the single error kind returned by every operation
//! - [`TiendaMobilConfig`]: validated configuration for an [`Api`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tienda_mobil::Api;
//!
//! let api = Api::new("https://tiendamobil.com.ar/api", "my-api-key")?;
//!
//! let pending = api.get_pending_orders().await?;
//! for preview in &pending {
//!     println!("{preview} price list {}", preview.price_list());
//! }
//!
//! let order = api.get_order(1234).await?;
//! api.update_order_status(1234).await?;
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`TiendaMobilError`] whose message tells the cause
//! apart:
//!
//! ```rust,ignore
//! match api.update_resource("orders", 1234, serde_json::json!({})).await {
//!     Ok(_) => println!("updated"),
//!     Err(e) if e.message().starts_with("Error: ") => println!("rejected: {e}"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Lenient models**: building a model from a document never fails
//! - **One exchange per call**: no retries, no caching

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;

pub use api::Api;
pub use config::{ApiKey, BaseUrl, TiendaMobilConfig, TiendaMobilConfigBuilder};
pub use error::TiendaMobilError;
pub use models::{Customer, Order, OrderItem, OrderPreview, TiendaMobilModel};
