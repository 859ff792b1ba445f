//! Entries of the pending-orders listing.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::lenient;
use super::{Customer, TiendaMobilModel};

/// A pending order as returned by `GET /orders/`.
///
/// A read-only view over a JSON:API resource object:
///
/// ```json
/// {
///   "id": "1234",
///   "type": "orders",
///   "attributes": {
///     "businessman": "E-77",
///     "price-list": "R12",
///     "total-quantity": "3",
///     "total-amount": "1530.5",
///     "comment": "",
///     "customer": { "code": "1010", "name": "Juana Perez" }
///   }
/// }
/// ```
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tienda_mobil::models::{OrderPreview, TiendaMobilModel};
///
/// let preview = OrderPreview::from_json_document(
///     &json!({"id": "1", "attributes": {"price-list": "R12", "total-amount": "10.5"}}),
///     None,
/// );
/// assert_eq!(preview.price_list(), "12");
/// assert_eq!(preview.total_amount(), 10.5);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPreview {
    /// Resource id.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
    /// JSON:API resource type.
    #[serde(rename = "type", deserialize_with = "lenient::optional_string")]
    pub resource_type: Option<String>,
    #[serde(deserialize_with = "lenient::model")]
    pub attributes: OrderPreviewAttributes,
}

/// The `attributes` member of an [`OrderPreview`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPreviewAttributes {
    #[serde(deserialize_with = "lenient::string")]
    pub businessman: String,
    #[serde(rename = "price-list", deserialize_with = "lenient::string")]
    pub price_list: String,
    #[serde(rename = "total-quantity", deserialize_with = "lenient::string")]
    pub total_quantity: String,
    #[serde(deserialize_with = "lenient::model")]
    pub customer: Customer,
    #[serde(deserialize_with = "lenient::string")]
    pub comment: String,
    #[serde(rename = "total-amount", deserialize_with = "lenient::string")]
    pub total_amount: String,
}

impl OrderPreview {
    /// The customer who placed the order.
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.attributes.customer
    }

    #[must_use]
    pub fn businessman(&self) -> &str {
        &self.attributes.businessman
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.attributes.comment
    }

    /// `total-amount` as a float; `0.0` when empty or unparseable.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.attributes.total_amount.trim().parse().unwrap_or(0.0)
    }

    /// `total-quantity` as an integer; `0` when empty or unparseable.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.attributes.total_quantity.trim().parse().unwrap_or(0)
    }

    /// `price-list` with every `'R'` removed, e.g. `"RA-R1"` becomes `"A-1"`.
    #[must_use]
    pub fn price_list(&self) -> String {
        self.attributes.price_list.replace('R', "")
    }
}

impl TiendaMobilModel for OrderPreview {}

/// Hashes on `id` only. A missing id hashes like an empty one, matching
/// equality, which cannot tell them apart. Previews without an id therefore
/// share one bucket and are not useful as set members or map keys.
impl Hash for OrderPreview {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.as_deref().unwrap_or_default().hash(state);
    }
}

impl fmt::Display for OrderPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrderPreview(ID={}, Customer='{}', TotalAmount='{}')",
            self.id.as_deref().unwrap_or_default(),
            self.attributes.customer.code,
            self.total_amount()
        )
    }
}
