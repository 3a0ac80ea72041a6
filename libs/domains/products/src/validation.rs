//! Payload validation for product writes.
//!
//! Payloads arrive as raw JSON so that missing fields, wrong types and bad
//! values all produce the catalog's own messages instead of a deserializer
//! error. Rules are checked in order and the first failure wins:
//!
//! 1. `name`, `description` and `category` are non-empty strings
//! 2. `price` is present and not null
//! 3. `inStock` is a boolean
//! 4. `price` is a number `>= 0`
//!
//! Rules 1-3 report [`REQUIRED_MESSAGE`], rule 4 reports [`PRICE_MESSAGE`].

use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductDraft, ProductPatch};

pub const REQUIRED_MESSAGE: &str =
    "All fields (name, description, price, category, inStock) are required.";

pub const PRICE_MESSAGE: &str = "Price must be a positive number.";

fn required() -> ProductError {
    ProductError::Validation(REQUIRED_MESSAGE.to_string())
}

fn invalid_price() -> ProductError {
    ProductError::Validation(PRICE_MESSAGE.to_string())
}

fn required_text(fields: &Map<String, Value>, key: &str) -> ProductResult<String> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(required()),
    }
}

impl From<ValidationErrors> for ProductError {
    fn from(errors: ValidationErrors) -> Self {
        if errors.field_errors().contains_key("price") {
            invalid_price()
        } else {
            required()
        }
    }
}

/// Check a create payload and turn it into a draft.
pub fn validate(payload: &Value) -> ProductResult<ProductDraft> {
    let fields = payload.as_object().ok_or_else(required)?;

    let name = required_text(fields, "name")?;
    let description = required_text(fields, "description")?;
    let category = required_text(fields, "category")?;

    let price = fields
        .get("price")
        .filter(|v| !v.is_null())
        .ok_or_else(required)?;
    let in_stock = fields
        .get("inStock")
        .and_then(Value::as_bool)
        .ok_or_else(required)?;
    let price = price.as_f64().ok_or_else(invalid_price)?;

    let draft = ProductDraft {
        name,
        description,
        price,
        category,
        in_stock,
    };
    draft.validate()?;

    Ok(draft)
}

/// Check an update payload against the record it would modify.
///
/// The patch is overlaid on the existing fields and the result goes through
/// [`validate`], so a partial patch is accepted as long as the merged
/// product is still valid. Only the keys present in the payload end up in
/// the returned patch; a patch `id` is ignored.
pub fn validate_update(existing: &Product, patch: &Value) -> ProductResult<ProductPatch> {
    let fields = patch.as_object().ok_or_else(required)?;

    let mut merged = serde_json::to_value(existing.to_draft())?;
    let Value::Object(base) = &mut merged else {
        return Err(ProductError::Internal(
            "product did not serialize to an object".to_string(),
        ));
    };
    for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != "id") {
        base.insert(key.clone(), value.clone());
    }

    let draft = validate(&merged)?;
    let present = |key: &str| fields.contains_key(key);

    Ok(ProductPatch {
        name: present("name").then_some(draft.name),
        description: present("description").then_some(draft.description),
        price: present("price").then_some(draft.price),
        category: present("category").then_some(draft.category),
        in_stock: present("inStock").then_some(draft.in_stock),
    })
}
