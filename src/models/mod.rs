//! Domain models for Tienda Mobil API documents.
//!
//! # Overview
//!
//! - [`Customer`]: the buyer embedded in every order
//! - [`OrderItem`]: one product line of an [`Order`]
//! - [`OrderPreview`]: an entry of the pending-orders listing
//! - [`Order`]: a single fetched order with its items
//!
//! All four implement [`TiendaMobilModel`], which provides construction from
//! a raw JSON:API document and the dictionary / JSON projections.
//!
//! # Construction Never Fails
//!
//! Missing or mistyped fields resolve to the field's declared default. Every
//! model implements `Default` with those declared defaults, so partial
//! construction uses struct update syntax:
//!
//! ```rust
//! use tienda_mobil::models::Customer;
//!
//! let customer = Customer {
//!     code: "C-1".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(customer.gender, "female");
//! ```
//!
//! # Dictionary Projection
//!
//! [`TiendaMobilModel::to_dict`] expands nested models into nested objects
//! and **omits every falsy field**: empty strings, zero, `false`, `null`,
//! empty lists and empty objects never appear in the projection.
//!
//! ```rust
//! use tienda_mobil::models::{OrderItem, TiendaMobilModel};
//!
//! let item = OrderItem::new("47633002", "");
//! assert_eq!(item.to_json_string(), r#"{"code":"47633002"}"#);
//! ```

mod customer;
mod lenient;
mod order;
mod order_item;
mod order_preview;

pub use customer::Customer;
pub use order::{Order, OrderAttributes};
pub use order_item::OrderItem;
pub use order_preview::{OrderPreview, OrderPreviewAttributes};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::TiendaMobilError;

/// Shared behavior of every Tienda Mobil model.
///
/// Equality of models is defined on [`to_dict`](Self::to_dict): two models
/// are equal when their projections are deep-equal.
pub trait TiendaMobilModel: Serialize + DeserializeOwned + Default {
    /// Builds a model from a JSON document.
    ///
    /// `overrides` are merged into the top level of the document before
    /// construction and win over document members with the same name.
    /// A document that is not a JSON object yields the default model.
    fn from_json_document(doc: &Value, overrides: Option<&Map<String, Value>>) -> Self {
        let Value::Object(object) = doc else {
            return Self::default();
        };

        let mut merged = object.clone();
        if let Some(overrides) = overrides {
            for (key, value) in overrides {
                merged.insert(key.clone(), value.clone());
            }
        }

        lenient::from_object(Value::Object(merged))
    }

    /// Parses `text` as JSON and builds a model from it.
    ///
    /// # Errors
    ///
    /// Returns a `JSON parse error` [`TiendaMobilError`] if `text` is not
    /// valid JSON.
    fn from_json_str(text: &str) -> Result<Self, TiendaMobilError> {
        let doc: Value = serde_json::from_str(text).map_err(|e| TiendaMobilError::json_parse(&e))?;
        Ok(Self::from_json_document(&doc, None))
    }

    /// Returns the falsy-omitting dictionary projection of this model.
    fn to_dict(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => prune_map(map),
            _ => Map::new(),
        }
    }

    /// Returns [`to_dict`](Self::to_dict) serialized as JSON with sorted keys.
    fn to_json_string(&self) -> String {
        Value::Object(self.to_dict()).to_string()
    }
}

/// Returns `true` for values omitted from a dictionary projection.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn prune(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(prune_map(map)),
        // Elements are projected but never dropped.
        Value::Array(items) => Value::Array(items.into_iter().map(prune).collect()),
        other => other,
    }
}

fn prune_map(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (key, prune(value)))
        .filter(|(_, value)| !is_falsy(value))
        .collect()
}

/// Implements `PartialEq`/`Eq` through the dictionary projection.
macro_rules! impl_dict_eq {
    ($($model:ty),+ $(,)?) => {
        $(
            impl PartialEq for $model {
                fn eq(&self, other: &Self) -> bool {
                    self.to_dict() == other.to_dict()
                }
            }

            impl Eq for $model {}
        )+
    };
}

impl_dict_eq!(Customer, OrderItem, OrderPreview, Order);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&Value::Null));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));
        assert!(is_falsy(&json!([])));
        assert!(is_falsy(&json!({})));

        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!(-1)));
        assert!(!is_falsy(&json!("0")));
        assert!(!is_falsy(&json!([0])));
        assert!(!is_falsy(&json!({"a": null})));
    }

    #[test]
    fn test_prune_is_recursive_but_keeps_array_elements() {
        let pruned = prune(json!({
            "a": "",
            "b": {"c": "", "d": 0},
            "e": [{"f": ""}, {"g": "x"}],
            "h": "kept"
        }));

        assert_eq!(pruned, json!({"e": [{}, {"g": "x"}], "h": "kept"}));
    }

    #[test]
    fn test_from_json_document_with_overrides() {
        let doc = json!({"code": "1", "quantity": "2"});
        let mut overrides = Map::new();
        overrides.insert("quantity".to_string(), json!("5"));

        let item = OrderItem::from_json_document(&doc, Some(&overrides));

        assert_eq!(item.code, "1");
        assert_eq!(item.quantity, "5");
    }

    #[test]
    fn test_from_json_document_non_object_is_default() {
        assert_eq!(
            Customer::from_json_document(&json!(null), None),
            Customer::default()
        );
        assert_eq!(
            Order::from_json_document(&json!([1, 2]), None),
            Order::default()
        );
    }

    #[test]
    fn test_from_json_str_reports_parse_errors() {
        let error = OrderItem::from_json_str("{not json").unwrap_err();
        assert!(error.message().starts_with("JSON parse error"));

        let item = OrderItem::from_json_str(r#"{"code": "9"}"#).unwrap();
        assert_eq!(item.code, "9");
    }

    #[test]
    fn test_to_json_string_has_sorted_keys() {
        let customer = Customer {
            name: "Ana".to_string(),
            code: "C1".to_string(),
            city: "Rosario".to_string(),
            ..Default::default()
        };

        assert_eq!(
            customer.to_json_string(),
            r#"{"city":"Rosario","code":"C1","gender":"female","name":"Ana"}"#
        );
    }
}
