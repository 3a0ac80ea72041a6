//! Aggregate counts over a product snapshot.

use crate::models::{CategoryCounts, Product, StockStats};

pub fn stock_stats(products: &[Product]) -> StockStats {
    let total_products = products.len();
    let in_stock = products.iter().filter(|p| p.in_stock).count();

    StockStats {
        total_products,
        in_stock,
        out_of_stock: total_products - in_stock,
    }
}

/// Counts per category, as stored (not case-normalized).
pub fn category_counts(products: &[Product]) -> CategoryCounts {
    products
        .iter()
        .fold(CategoryCounts::new(), |mut counts, p| {
            *counts.entry(p.category.clone()).or_default() += 1;
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;

    #[test]
    fn test_stock_stats_over_seed() {
        let stats = stock_stats(&seed_products());
        assert_eq!(
            stats,
            StockStats {
                total_products: 3,
                in_stock: 2,
                out_of_stock: 1,
            }
        );
    }

    #[test]
    fn test_category_counts_over_seed() {
        let counts = category_counts(&seed_products());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["electronics"], 2);
        assert_eq!(counts["kitchen"], 1);
    }

    #[test]
    fn test_empty_snapshot() {
        assert_eq!(stock_stats(&[]).total_products, 0);
        assert!(category_counts(&[]).is_empty());
    }

    #[test]
    fn test_categories_are_not_normalized() {
        let mut products = seed_products();
        products[0].category = "Electronics".to_string();

        let counts = category_counts(&products);
        assert_eq!(counts["Electronics"], 1);
        assert_eq!(counts["electronics"], 1);
    }
}
