use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::ProductId;
use crate::domain::store::GroceryStore;
use crate::errors::LookupError;

/// Per-store membership check used by fleet search.
///
/// In-memory stores never fail; remote backends report transport problems as
/// `LookupError` so a search can fail instead of dropping the store silently.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    fn store_name(&self) -> &str;

    async fn has_product(&self, product_id: ProductId) -> Result<bool, LookupError>;
}

#[async_trait]
impl ProductLookup for GroceryStore {
    fn store_name(&self) -> &str {
        self.name()
    }

    async fn has_product(&self, product_id: ProductId) -> Result<bool, LookupError> {
        Ok(GroceryStore::has_product(self, product_id).await)
    }
}

#[async_trait]
impl<T: ProductLookup + ?Sized> ProductLookup for Arc<T> {
    fn store_name(&self) -> &str {
        (**self).store_name()
    }

    async fn has_product(&self, product_id: ProductId) -> Result<bool, LookupError> {
        (**self).has_product(product_id).await
    }
}
