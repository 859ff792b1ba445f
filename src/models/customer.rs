//! The customer embedded in orders and order previews.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;
use super::TiendaMobilModel;

const FEMALE: &str = "female";

/// A customer as it appears under an order's `customer` attribute.
///
/// Customers have no identity of their own and are therefore not hashable.
/// Every field defaults to the empty string except `gender`, which defaults
/// to `"female"`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tienda_mobil::models::{Customer, TiendaMobilModel};
///
/// let customer = Customer::from_json_document(
///     &json!({"code": "1010", "name": "Juana Perez", "gender": "male"}),
///     None,
/// );
/// assert_eq!(customer.code, "1010");
/// assert_eq!(customer.sex(), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub commercial_origin: String,
    #[serde(deserialize_with = "lenient::string")]
    pub address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub locality: String,
    #[serde(deserialize_with = "lenient::string")]
    pub telephone: String,
    #[serde(deserialize_with = "gender")]
    pub gender: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub city: String,
    #[serde(deserialize_with = "lenient::string")]
    pub province: String,
    #[serde(deserialize_with = "lenient::string")]
    pub cellphone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(deserialize_with = "lenient::string")]
    pub businessman_code: String,
    #[serde(deserialize_with = "lenient::string")]
    pub associate_code: String,
    #[serde(deserialize_with = "lenient::string")]
    pub zip_code: String,
    #[serde(deserialize_with = "lenient::string")]
    pub charge_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub birthdate: String,
}

impl Customer {
    /// Numeric sex code: `1` when `gender` is `"female"`, `0` otherwise.
    #[must_use]
    pub fn sex(&self) -> u8 {
        u8::from(self.gender == FEMALE)
    }
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            email: String::new(),
            commercial_origin: String::new(),
            address: String::new(),
            locality: String::new(),
            telephone: String::new(),
            gender: FEMALE.to_string(),
            name: String::new(),
            city: String::new(),
            province: String::new(),
            cellphone: String::new(),
            code: String::new(),
            businessman_code: String::new(),
            associate_code: String::new(),
            zip_code: String::new(),
            charge_date: String::new(),
            birthdate: String::new(),
        }
    }
}

impl TiendaMobilModel for Customer {}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer(Code='{}', Name='{}')", self.code, self.name)
    }
}

// A mistyped gender falls back to the declared default, not to "".
fn gender<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient::text(value).unwrap_or_else(|| FEMALE.to_string()))
}
