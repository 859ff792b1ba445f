//! A single order fetched with `GET /orders/{id}`.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::lenient;
use super::{Customer, OrderItem, TiendaMobilModel};

/// A fetched order with its customer and items.
///
/// `order-items` keeps the order of the source document.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tienda_mobil::models::{Order, TiendaMobilModel};
///
/// let order = Order::from_json_document(
///     &json!({
///         "id": "99",
///         "type": "orders",
///         "attributes": {
///             "price-list": "R12",
///             "order-items": [{"code": "47633002", "quantity": "2"}]
///         }
///     }),
///     None,
/// );
/// assert_eq!(order.price_list(), "R12");
/// assert_eq!(order.items()[0].code, "47633002");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::optional_string")]
    pub resource_type: Option<String>,
    #[serde(deserialize_with = "lenient::model")]
    pub attributes: OrderAttributes,
}

/// The `attributes` member of an [`Order`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderAttributes {
    #[serde(deserialize_with = "lenient::string")]
    pub comment: String,
    #[serde(rename = "price-list", deserialize_with = "lenient::string")]
    pub price_list: String,
    #[serde(rename = "order-items", deserialize_with = "lenient::models")]
    pub order_items: Vec<OrderItem>,
    #[serde(deserialize_with = "lenient::model")]
    pub customer: Customer,
}

impl Order {
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.attributes.customer
    }

    /// The order's items, in document order.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.attributes.order_items
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.attributes.comment
    }

    /// `price-list`, verbatim.
    #[must_use]
    pub fn price_list(&self) -> &str {
        &self.attributes.price_list
    }
}

impl TiendaMobilModel for Order {}

/// Hashes on `id` only. A missing id hashes like an empty one, matching
/// equality, which cannot tell them apart. Orders without an id therefore
/// share one bucket and are not useful as set members or map keys.
impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.as_deref().unwrap_or_default().hash(state);
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order(ID={}, Customer={})",
            self.id.as_deref().unwrap_or_default(),
            self.attributes.customer.code
        )
    }
}
