//! Fruit record and creation payload

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Identifier assigned by the store, starting at 1
pub type FruitId = u64;

/// A stored fruit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: FruitId,
    pub name: String,
    pub price: f64,
}

impl Fruit {
    /// Create a fruit record from an assigned id and a validated payload
    pub fn new(id: FruitId, input: FruitInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
        }
    }
}

/// Creation payload, before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct FruitInput {
    pub name: String,
    pub price: f64,
}

impl FruitInput {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Validate a raw JSON document into a creation payload.
    ///
    /// The document must be an object with a non-blank string `name` and a
    /// finite, strictly positive numeric `price`. Other fields are ignored.
    pub fn from_json(payload: &Value) -> Result<Self, InvalidInput> {
        let fields = payload.as_object().ok_or(InvalidInput::NotAnObject)?;

        let name = match fields.get("name") {
            None | Some(Value::Null) => return Err(InvalidInput::Missing("name")),
            Some(Value::String(s)) => s,
            Some(_) => return Err(InvalidInput::NameNotString),
        };
        if name.trim().is_empty() {
            return Err(InvalidInput::EmptyName);
        }

        let price = match fields.get("price") {
            None | Some(Value::Null) => return Err(InvalidInput::Missing("price")),
            Some(Value::Number(n)) => n.as_f64().ok_or(InvalidInput::PriceNotNumber)?,
            Some(_) => return Err(InvalidInput::PriceNotNumber),
        };
        if !price.is_finite() || price <= 0.0 {
            return Err(InvalidInput::NonPositivePrice);
        }

        Ok(Self::new(name.clone(), price))
    }
}

/// Reasons a creation payload is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("malformed JSON body: {0}")]
    MalformedJson(String),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("field '{0}' is required")]
    Missing(&'static str),
    #[error("field 'name' must be a string")]
    NameNotString,
    #[error("field 'name' must not be empty")]
    EmptyName,
    #[error("field 'price' must be a number")]
    PriceNotNumber,
    #[error("field 'price' must be a positive number")]
    NonPositivePrice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_valid() {
        let input = FruitInput::from_json(&json!({"name": "Banana", "price": 6})).unwrap();
        assert_eq!(input, FruitInput::new("Banana", 6.0));
    }

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let input =
            FruitInput::from_json(&json!({"name": "Kiwi", "price": 2.5, "color": "green"}))
                .unwrap();
        assert_eq!(input.name, "Kiwi");
        assert_eq!(input.price, 2.5);
    }

    #[test]
    fn test_from_json_keeps_name_as_sent() {
        let input = FruitInput::from_json(&json!({"name": " Maçã ", "price": 5})).unwrap();
        assert_eq!(input.name, " Maçã ");
    }

    #[test]
    fn test_from_json_missing_fields() {
        assert_eq!(
            FruitInput::from_json(&json!({"axd": "Banana", "pit": 6})),
            Err(InvalidInput::Missing("name"))
        );
        assert_eq!(
            FruitInput::from_json(&json!({"name": "Banana"})),
            Err(InvalidInput::Missing("price"))
        );
        assert_eq!(
            FruitInput::from_json(&json!({"name": null, "price": 1})),
            Err(InvalidInput::Missing("name"))
        );
    }

    #[test]
    fn test_from_json_wrong_types() {
        assert_eq!(
            FruitInput::from_json(&json!({"name": 42, "price": 6})),
            Err(InvalidInput::NameNotString)
        );
        assert_eq!(
            FruitInput::from_json(&json!({"name": "Banana", "price": "6"})),
            Err(InvalidInput::PriceNotNumber)
        );
        assert_eq!(
            FruitInput::from_json(&json!(["Banana", 6])),
            Err(InvalidInput::NotAnObject)
        );
    }

    #[test]
    fn test_from_json_rejects_blank_name() {
        assert_eq!(
            FruitInput::from_json(&json!({"name": "", "price": 6})),
            Err(InvalidInput::EmptyName)
        );
        assert_eq!(
            FruitInput::from_json(&json!({"name": "   ", "price": 6})),
            Err(InvalidInput::EmptyName)
        );
    }

    #[test]
    fn test_from_json_rejects_non_positive_price() {
        assert_eq!(
            FruitInput::from_json(&json!({"name": "Banana", "price": 0})),
            Err(InvalidInput::NonPositivePrice)
        );
        assert_eq!(
            FruitInput::from_json(&json!({"name": "Banana", "price": -1.5})),
            Err(InvalidInput::NonPositivePrice)
        );
    }

    #[test]
    fn test_fruit_serializes_to_flat_object() {
        let fruit = Fruit::new(1, FruitInput::new("Kiwi", 3.0));
        let value = serde_json::to_value(&fruit).unwrap();
        assert_eq!(value["id"], json!(1));
        assert_eq!(value["name"], json!("Kiwi"));
        assert_eq!(value["price"].as_f64(), Some(3.0));
    }
}
