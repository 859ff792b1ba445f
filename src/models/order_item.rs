//! A product line of an order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lenient;
use super::TiendaMobilModel;

/// One element of an order's `order-items` attribute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    /// Product code.
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,
    /// Ordered quantity, as sent by the API.
    #[serde(deserialize_with = "lenient::string")]
    pub quantity: String,
}

impl OrderItem {
    /// Creates an order item from its product code and quantity.
    pub fn new(code: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            quantity: quantity.into(),
        }
    }
}

impl TiendaMobilModel for OrderItem {}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderItem(Code='{}', Quantity={})", self.code, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_order_item_new() {
        let item = OrderItem::new("47633002", "2");
        assert_eq!(item.code, "47633002");
        assert_eq!(item.quantity, "2");
    }

    #[test]
    fn test_numeric_quantity_is_kept_as_text() {
        let item = OrderItem::from_json_document(&json!({"code": "47633002", "quantity": 2}), None);
        assert_eq!(item.quantity, "2");
    }

    #[test]
    fn test_default_item_projects_to_empty_dict() {
        assert!(OrderItem::default().to_dict().is_empty());
        assert_eq!(OrderItem::default().to_json_string(), "{}");
    }

    #[test]
    fn test_equality_through_projection() {
        assert_eq!(OrderItem::new("1", "2"), OrderItem::new("1", "2"));
        assert_ne!(OrderItem::new("1", "2"), OrderItem::new("1", "3"));
    }

    #[test]
    fn test_round_trip_through_dict() {
        let item = OrderItem::from_json_document(&json!({"code": "47633002", "quantity": "2"}), None);
        let dict = Value::Object(item.to_dict());

        assert_eq!(OrderItem::from_json_document(&dict, None), item);

        let partial = OrderItem::new("47633002", "");
        let dict = Value::Object(partial.to_dict());
        assert_eq!(OrderItem::from_json_document(&dict, None), partial);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            OrderItem::new("47633002", "2").to_string(),
            "OrderItem(Code='47633002', Quantity=2)"
        );
    }
}
