use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::models::{Product, ProductDraft, ProductPatch};
use crate::seed::seed_products;

/// Repository trait for Product storage
///
/// Implementations own the product collection. Listing preserves insertion
/// order, and ids are allocated by the repository on create.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Store a new product under a freshly allocated ID
    async fn create(&self, draft: ProductDraft) -> ProductResult<Product>;

    /// Merge the present patch fields into an existing product
    async fn update(&self, id: &str, patch: ProductPatch) -> ProductResult<Product>;

    /// Remove a product, returning it
    async fn delete(&self, id: &str) -> ProductResult<Product>;
}

/// In-memory product store
///
/// Clones share the same collection. Each write holds the write lock for
/// the whole mutation; reads copy a snapshot under the read lock.
#[derive(Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryProductRepository {
    /// An empty store with random UUID ids
    pub fn new() -> Self {
        Self::with_products(Vec::new(), Arc::new(UuidIdGenerator))
    }

    /// A store holding the startup catalog
    pub fn with_seed() -> Self {
        Self::with_products(seed_products(), Arc::new(UuidIdGenerator))
    }

    /// An empty store using the given id source
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self::with_products(Vec::new(), ids)
    }

    pub fn with_products(products: Vec<Product>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            ids,
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, draft: ProductDraft) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = self.ids.next_id();
        if products.iter().any(|p| p.id == id) {
            return Err(ProductError::Internal(format!(
                "id generator returned an id already in use: {}",
                id
            )));
        }

        let product = Product::new(id, draft);
        products.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        product.apply_patch(patch);

        tracing::info!(product_id = %id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: &str) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        let removed = products.remove(index);

        tracing::info!(product_id = %id, "Deleted product");
        Ok(removed)
    }
}
