//! Product Service - Business logic layer

use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CategoryCounts, DeletedProduct, Product, ProductPage, StockStats};
use crate::query::{self, ProductQuery, SearchScope};
use crate::repository::ProductRepository;
use crate::stats;
use crate::validation;

/// Product service providing business logic operations
///
/// Writes go through validation before they reach the repository; reads
/// take a snapshot from the repository and run the query engine or the
/// aggregator over it.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    search_scope: SearchScope,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            search_scope: SearchScope::default(),
        }
    }

    /// Choose which text fields searches look at
    pub fn with_search_scope(mut self, scope: SearchScope) -> Self {
        self.search_scope = scope;
        self
    }

    pub fn search_scope(&self) -> SearchScope {
        self.search_scope
    }

    /// List products matching the query, one page at a time
    #[instrument(skip(self))]
    pub async fn list_products(&self, params: ProductQuery) -> ProductResult<ProductPage> {
        let products = self.repository.list().await?;
        Ok(query::query(&params, &products, self.search_scope))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product from a raw JSON payload
    #[instrument(skip(self, payload))]
    pub async fn create_product(&self, payload: Value) -> ProductResult<Product> {
        let draft = validation::validate(&payload)?;
        self.repository.create(draft).await
    }

    /// Update an existing product from a raw JSON payload
    ///
    /// A missing product is reported before the payload is looked at. Only
    /// the fields named in the payload are sent to the repository, so writes
    /// that land between the read and the update are kept.
    #[instrument(skip(self, payload))]
    pub async fn update_product(&self, id: &str, payload: Value) -> ProductResult<Product> {
        let existing = self.get_product(id).await?;
        let patch = validation::validate_update(&existing, &payload)?;
        self.repository.update(id, patch).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<DeletedProduct> {
        let removed = self.repository.delete(id).await?;
        Ok(DeletedProduct::from(removed))
    }

    /// Search products by text, without pagination
    #[instrument(skip(self))]
    pub async fn search_products(&self, term: Option<&str>) -> ProductResult<Vec<Product>> {
        let products = self.repository.list().await?;
        Ok(query::search(term, &products, self.search_scope))
    }

    /// In-stock and out-of-stock counts
    #[instrument(skip(self))]
    pub async fn stock_stats(&self) -> ProductResult<StockStats> {
        let products = self.repository.list().await?;
        Ok(stats::stock_stats(&products))
    }

    /// Product counts per category
    #[instrument(skip(self))]
    pub async fn category_counts(&self) -> ProductResult<CategoryCounts> {
        let products = self.repository.list().await?;
        Ok(stats::category_counts(&products))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            search_scope: self.search_scope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProductDraft, ProductPatch};
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use async_trait::async_trait;
    use crate::seed::seed_products;
    use crate::validation::{PRICE_MESSAGE, REQUIRED_MESSAGE};
    use mockall::predicate::eq;
    use serde_json::json;

    fn laptop() -> Product {
        seed_products().remove(0)
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq("missing"))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product("missing").await;

        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_create_validates_before_storing() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .create_product(json!({
                "name": "",
                "description": "d",
                "price": 1,
                "category": "c",
                "inStock": true
            }))
            .await;

        assert!(matches!(result, Err(ProductError::Validation(m)) if m == REQUIRED_MESSAGE));
    }

    #[tokio::test]
    async fn test_create_passes_draft_to_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .withf(|draft| draft.name == "Kettle" && draft.price == 25.0)
            .times(1)
            .returning(|draft| Ok(Product::new("new-id".to_string(), draft)));

        let service = ProductService::new(mock_repo);
        let product = service
            .create_product(json!({
                "name": "Kettle",
                "description": "Electric kettle",
                "price": 25,
                "category": "kitchen",
                "inStock": true
            }))
            .await
            .unwrap();

        assert_eq!(product.id, "new-id");
        assert_eq!(product.category, "kitchen");
    }

    #[tokio::test]
    async fn test_update_checks_existence_before_validation() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product("missing", json!({"price": -5}))
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_negative_price() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(Some(laptop())));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service.update_product("1", json!({"price": -5})).await;

        assert!(matches!(result, Err(ProductError::Validation(m)) if m == PRICE_MESSAGE));
    }

    #[tokio::test]
    async fn test_update_sends_merged_fields() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq("1"))
            .returning(|_| Ok(Some(laptop())));
        mock_repo
            .expect_update()
            .withf(|id, patch| {
                id == "1"
                    && *patch
                        == ProductPatch {
                            price: Some(999.0),
                            ..Default::default()
                        }
            })
            .returning(|_, patch: ProductPatch| {
                let mut product = laptop();
                product.apply_patch(patch);
                Ok(product)
            });

        let service = ProductService::new(mock_repo);
        let updated = service
            .update_product("1", json!({"price": 999}))
            .await
            .unwrap();

        assert_eq!(updated.price, 999.0);
        assert_eq!(updated.name, "Laptop");
    }

    /// Renames a product right after handing out its snapshot, standing in
    /// for another request that writes between the read and the update.
    struct RenameAfterRead {
        inner: InMemoryProductRepository,
    }

    #[async_trait]
    impl ProductRepository for RenameAfterRead {
        async fn list(&self) -> ProductResult<Vec<Product>> {
            self.inner.list().await
        }

        async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
            let snapshot = self.inner.get_by_id(id).await?;
            let rename = ProductPatch {
                name: Some("Renamed".to_string()),
                ..Default::default()
            };
            self.inner.update(id, rename).await?;
            Ok(snapshot)
        }

        async fn create(&self, draft: ProductDraft) -> ProductResult<Product> {
            self.inner.create(draft).await
        }

        async fn update(&self, id: &str, patch: ProductPatch) -> ProductResult<Product> {
            self.inner.update(id, patch).await
        }

        async fn delete(&self, id: &str) -> ProductResult<Product> {
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn test_update_keeps_concurrent_write_to_other_fields() {
        let store = InMemoryProductRepository::with_seed();
        let service = ProductService::new(RenameAfterRead {
            inner: store.clone(),
        });

        let updated = service
            .update_product("1", json!({"price": 999}))
            .await
            .unwrap();

        assert_eq!(updated.price, 999.0);
        assert_eq!(updated.name, "Renamed");

        let stored = store.get_by_id("1").await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_delete_wraps_removed_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(eq("1"))
            .returning(|_| Ok(laptop()));

        let service = ProductService::new(mock_repo);
        let deleted = service.delete_product("1").await.unwrap();

        assert_eq!(deleted.message, "Product deleted successfully");
        assert_eq!(deleted.product.name, "Laptop");
    }

    #[tokio::test]
    async fn test_search_uses_configured_scope() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().returning(|| Ok(seed_products()));

        let service = ProductService::new(mock_repo);
        assert!(service.search_products(Some("timer")).await.unwrap().is_empty());

        let service = service.with_search_scope(SearchScope::NameAndDescription);
        let found = service.search_products(Some("timer")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");
    }

    #[tokio::test]
    async fn test_stats_over_seed() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().returning(|| Ok(seed_products()));

        let service = ProductService::new(mock_repo);

        let stock = service.stock_stats().await.unwrap();
        assert_eq!(
            (stock.total_products, stock.in_stock, stock.out_of_stock),
            (3, 2, 1)
        );

        let counts = service.category_counts().await.unwrap();
        assert_eq!(counts.get("electronics"), Some(&2));
        assert_eq!(counts.get("kitchen"), Some(&1));
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(ProductError::Internal("store unavailable".to_string())));

        let service = ProductService::new(mock_repo);
        let result = service.list_products(ProductQuery::default()).await;

        assert!(matches!(result, Err(ProductError::Internal(_))));
    }
}
