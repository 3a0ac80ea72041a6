//! Products loaded into the catalog at startup.

use crate::models::Product;

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    in_stock: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        in_stock,
    }
}

/// The fixed starting catalog, with ids `"1"`, `"2"` and `"3"`.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Laptop",
            "High-performance laptop with 16GB RAM",
            1200.0,
            "electronics",
            true,
        ),
        product(
            "2",
            "Smartphone",
            "Latest model with 128GB storage",
            800.0,
            "electronics",
            true,
        ),
        product(
            "3",
            "Coffee Maker",
            "Programmable coffee maker with timer",
            50.0,
            "kitchen",
            false,
        ),
    ]
}
