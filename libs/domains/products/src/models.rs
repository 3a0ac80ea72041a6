use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

/// Message returned alongside a deleted product
pub const DELETED_MESSAGE: &str = "Product deleted successfully";

/// Product entity - the only record kind held by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store
    #[schema(example = "1")]
    pub id: String,
    /// Product name
    #[schema(example = "Laptop")]
    pub name: String,
    /// Product description
    #[schema(example = "High-performance laptop with 16GB RAM")]
    pub description: String,
    /// Price, never negative
    #[schema(example = 1200)]
    pub price: f64,
    /// Category, matched case-insensitively when filtering
    #[schema(example = "electronics")]
    pub category: String,
    /// Whether the product is currently in stock
    pub in_stock: bool,
}

impl Product {
    /// Create a stored product from a validated draft
    pub fn new(id: String, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            in_stock: draft.in_stock,
        }
    }

    /// Merge the present fields of a patch. The id is never touched.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
    }

    /// The data fields of this product, without the id
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            in_stock: self.in_stock,
        }
    }
}

/// A complete, validated set of product fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub category: String,
    pub in_stock: bool,
}

/// Partial product fields applied on update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// One page of a filtered product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    /// Requested page, echoed back
    pub page: i64,
    /// Number of products matching the filters, before pagination
    pub total: usize,
    pub results: Vec<Product>,
}

/// Stock counts over the whole catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
}

/// Product count per category, keyed by the category as stored
pub type CategoryCounts = BTreeMap<String, usize>;

/// Response body for a successful delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedProduct {
    #[schema(example = "Product deleted successfully")]
    pub message: String,
    pub product: Product,
}

impl From<Product> for DeletedProduct {
    fn from(product: Product) -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
            product,
        }
    }
}
