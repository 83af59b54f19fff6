use tokio::sync::RwLock;

use crate::domain::inventory::{BulkInsert, Inventory};
use crate::domain::product::{Product, ProductId, ProductIdentifier};
use crate::errors::StoreError;

/// A named store owning one inventory.
///
/// Every operation takes the store's own lock for its duration only, so
/// lookups against different stores never contend and a mutation on one store
/// is serialized against lookups on that same store.
#[derive(Debug)]
pub struct GroceryStore {
    name: String,
    inventory: RwLock<Inventory>,
}

impl GroceryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_inventory(name, Inventory::new())
    }

    pub fn with_inventory(name: impl Into<String>, inventory: Inventory) -> Self {
        Self { name: name.into(), inventory: RwLock::new(inventory) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn add_product(&self, name: &str, product_id: ProductId) -> Result<(), StoreError> {
        let mut inventory = self.inventory.write().await;
        inventory.add_product(name, product_id)
    }

    pub async fn add_multiple<N: AsRef<str>>(
        &self,
        names: &[N],
        product_ids: &[ProductId],
    ) -> Result<BulkInsert, StoreError> {
        let mut inventory = self.inventory.write().await;
        inventory.add_multiple(names, product_ids)
    }

    pub async fn has_product(&self, product_id: ProductId) -> bool {
        let inventory = self.inventory.read().await;
        inventory.contains(product_id)
    }

    pub async fn delete_product(
        &self,
        identifier: impl Into<ProductIdentifier>,
    ) -> Result<Product, StoreError> {
        let identifier = identifier.into();
        let mut inventory = self.inventory.write().await;
        let removed = inventory.remove(&identifier)?;
        tracing::debug!(
            event_name = "store.product.deleted",
            store = %self.name,
            product_id = removed.id.0,
            "product removed from inventory"
        );
        Ok(removed)
    }

    pub async fn describe(&self) -> String {
        let inventory = self.inventory.read().await;
        if inventory.is_empty() {
            format!("{} store contains the following products:", self.name)
        } else {
            format!("{} store contains the following products:\n{}", self.name, inventory)
        }
    }

    pub async fn snapshot(&self) -> Inventory {
        self.inventory.read().await.clone()
    }
}
