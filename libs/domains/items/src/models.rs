use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::ItemError;

/// Item entity - a priced, categorized inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier, starting at 1 and never reused
    pub id: i64,
    /// Item name
    pub name: String,
    /// Item description
    pub description: String,
    /// Unit price, always greater than zero
    pub price: f64,
    /// Category label
    pub category: String,
    /// Units in stock
    pub stock_quantity: i32,
}

/// DTO for creating a new item
///
/// Any `id` in the request body is ignored; the store assigns it.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(
        required(message = "Price is required"),
        range(exclusive_min = 0.0, message = "Price must be greater than zero")
    )]
    pub price: Option<f64>,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    /// Defaults to 0 when omitted
    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    pub stock_quantity: Option<i32>,
}

/// DTO for updating an existing item
///
/// Name, description, price and category replace the stored values.
/// A missing or `null` `stockQuantity` keeps the current stock.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(
        required(message = "Price is required"),
        range(exclusive_min = 0.0, message = "Price must be greater than zero")
    )]
    pub price: Option<f64>,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    pub stock_quantity: Option<i32>,
}

/// Validated field values handed to the store for add and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: Option<i32>,
}

impl TryFrom<CreateItem> for ItemData {
    type Error = ItemError;

    fn try_from(input: CreateItem) -> Result<Self, Self::Error> {
        input.validate()?;
        Ok(Self {
            price: required_price(input.price)?,
            name: input.name,
            description: input.description,
            category: input.category,
            stock_quantity: input.stock_quantity,
        })
    }
}

impl TryFrom<UpdateItem> for ItemData {
    type Error = ItemError;

    fn try_from(input: UpdateItem) -> Result<Self, Self::Error> {
        input.validate()?;
        Ok(Self {
            price: required_price(input.price)?,
            name: input.name,
            description: input.description,
            category: input.category,
            stock_quantity: input.stock_quantity,
        })
    }
}

/// Unwraps a price that has already passed `required` validation.
fn required_price(price: Option<f64>) -> Result<f64, ValidationErrors> {
    let Some(price) = price else {
        let mut errors = ValidationErrors::new();
        errors.add(
            "price",
            ValidationError::new("required").with_message("Price is required".into()),
        );
        return Err(errors);
    };
    Ok(price)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

impl Item {
    /// Build a stored item from validated data, defaulting stock to 0
    pub fn new(id: i64, data: ItemData) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category,
            stock_quantity: data.stock_quantity.unwrap_or(0),
        }
    }

    /// Overwrite every field except `id`; stock only when supplied
    pub fn apply_update(&mut self, data: ItemData) {
        self.name = data.name;
        self.description = data.description;
        self.price = data.price;
        self.category = data.category;
        if let Some(stock_quantity) = data.stock_quantity {
            self.stock_quantity = stock_quantity;
        }
    }
}

/// Payload of `GET /api/items`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemsSummary {
    pub message: String,
    pub version: String,
    pub total_items: usize,
    /// "METHOD path" mapped to a short description
    pub endpoints: BTreeMap<String, String>,
}

/// Payload of `DELETE /api/items/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConfirmation {
    pub message: String,
    pub deleted_id: i64,
    pub timestamp: DateTime<Utc>,
}

impl DeleteConfirmation {
    pub fn new(deleted_id: i64) -> Self {
        Self {
            message: "Item deleted successfully".to_string(),
            deleted_id,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> CreateItem {
        CreateItem {
            name: "Laptop".to_string(),
            description: "High-performance gaming laptop".to_string(),
            price: Some(1299.99),
            category: "Electronics".to_string(),
            stock_quantity: Some(15),
        }
    }

    #[test]
    fn test_valid_create_item_converts() {
        let data = ItemData::try_from(laptop()).unwrap();
        assert_eq!(data.name, "Laptop");
        assert_eq!(data.price, 1299.99);
        assert_eq!(data.stock_quantity, Some(15));
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let input = CreateItem {
            name: "   ".to_string(),
            description: String::new(),
            ..laptop()
        };

        let Err(ItemError::Validation(errors)) = ItemData::try_from(input) else {
            panic!("expected validation error");
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
        assert!(!fields.contains_key("category"));
    }

    #[test]
    fn test_price_must_be_present_and_positive() {
        for price in [None, Some(0.0), Some(-3.5)] {
            let input = CreateItem { price, ..laptop() };
            assert!(
                matches!(ItemData::try_from(input), Err(ItemError::Validation(_))),
                "price {price:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_price_is_a_validation_error() {
        let Err(ItemError::Validation(errors)) = ItemData::try_from(CreateItem {
            price: None,
            ..laptop()
        }) else {
            panic!("expected validation error");
        };
        assert!(errors.field_errors().contains_key("price"));

        let errors = required_price(None).unwrap_err();
        assert_eq!(errors.field_errors()["price"][0].code, "required");
        assert_eq!(required_price(Some(2.5)).unwrap(), 2.5);
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let input = UpdateItem {
            name: "Laptop".to_string(),
            description: "desc".to_string(),
            price: Some(10.0),
            category: "Electronics".to_string(),
            stock_quantity: Some(-1),
        };
        assert!(matches!(
            ItemData::try_from(input),
            Err(ItemError::Validation(_))
        ));
    }

    #[test]
    fn test_new_item_defaults_stock_to_zero() {
        let data = ItemData::try_from(CreateItem {
            stock_quantity: None,
            ..laptop()
        })
        .unwrap();
        assert_eq!(Item::new(2, data).stock_quantity, 0);
    }

    #[test]
    fn test_apply_update_keeps_stock_when_absent() {
        let mut item = Item::new(1, ItemData::try_from(laptop()).unwrap());
        item.apply_update(ItemData {
            name: "Laptop Pro".to_string(),
            description: "Refreshed".to_string(),
            price: 1499.0,
            category: "Computers".to_string(),
            stock_quantity: None,
        });

        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Laptop Pro");
        assert_eq!(item.category, "Computers");
        assert_eq!(item.price, 1499.0);
        assert_eq!(item.stock_quantity, 15);
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = Item::new(3, ItemData::try_from(laptop()).unwrap());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["stockQuantity"], 15);
        assert!(json.get("stock_quantity").is_none());
    }

    #[test]
    fn test_missing_strings_deserialize_as_blank() {
        let input: CreateItem = serde_json::from_str(r#"{"price": 5.0, "id": 99}"#).unwrap();
        assert!(input.name.is_empty());
        assert!(input.validate().is_err());
    }
}
