use std::collections::HashMap;
use std::fmt;

use crate::domain::product::{Product, ProductId, ProductIdentifier};
use crate::errors::StoreError;

/// Product map for a single store.
///
/// Membership checks binary-search `index`, which holds every key of
/// `products` in ascending order and is updated on each insert and removal.
/// Listing and name-based removal walk the same index, so both are
/// deterministic regardless of insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    products: HashMap<ProductId, String>,
    index: Vec<ProductId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkInsert {
    /// Pairs written, counting overwrites of ids already present.
    pub applied: usize,
    pub rejected: Vec<RejectedProduct>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedProduct {
    pub position: usize,
    pub error: StoreError,
}

impl BulkInsert {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for `product_id`.
    pub fn add_product(&mut self, name: &str, product_id: ProductId) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation("product name is required".to_string()));
        }
        if product_id.0 == 0 {
            return Err(StoreError::Validation(
                "product id must be a positive integer".to_string(),
            ));
        }

        if self.products.insert(product_id, name.to_string()).is_none() {
            if let Err(position) = self.index.binary_search(&product_id) {
                self.index.insert(position, product_id);
            }
        }
        Ok(())
    }

    /// Applies `add_product` pairwise. A length mismatch rejects the whole call
    /// before anything is written; otherwise invalid pairs are skipped and
    /// reported while valid pairs stay applied.
    pub fn add_multiple<N: AsRef<str>>(
        &mut self,
        names: &[N],
        product_ids: &[ProductId],
    ) -> Result<BulkInsert, StoreError> {
        if names.len() != product_ids.len() {
            return Err(StoreError::Validation(format!(
                "got {} names for {} product ids",
                names.len(),
                product_ids.len()
            )));
        }

        let mut report = BulkInsert::default();
        for (position, (name, product_id)) in names.iter().zip(product_ids).enumerate() {
            match self.add_product(name.as_ref(), *product_id) {
                Ok(()) => report.applied += 1,
                Err(error) => report.rejected.push(RejectedProduct { position, error }),
            }
        }
        Ok(report)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.index.binary_search(&product_id).is_ok()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&str> {
        self.products.get(&product_id).map(String::as_str)
    }

    /// Removes one entry. Name matches take the lowest product id when several
    /// ids share the name. Insertion order is not tracked, so ascending id order
    /// stands in for it when picking the first match.
    pub fn remove(&mut self, identifier: &ProductIdentifier) -> Result<Product, StoreError> {
        let product_id = match identifier {
            ProductIdentifier::Id(product_id) => Some(*product_id),
            ProductIdentifier::Name(name) => self
                .index
                .iter()
                .copied()
                .find(|product_id| self.products.get(product_id) == Some(name)),
        };

        let removed = product_id.and_then(|product_id| {
            self.products.remove(&product_id).map(|name| Product { id: product_id, name })
        });

        match removed {
            Some(product) => {
                if let Ok(position) = self.index.binary_search(&product.id) {
                    self.index.remove(position);
                }
                Ok(product)
            }
            None => Err(StoreError::NotFound { identifier: identifier.clone() }),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Entries in ascending product id order.
    pub fn products(&self) -> impl Iterator<Item = (ProductId, &str)> + '_ {
        self.index.iter().filter_map(|product_id| {
            self.products.get(product_id).map(|name| (*product_id, name.as_str()))
        })
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (product_id, name)) in self.products().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "{product_id}: {name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::inventory::Inventory;
    use crate::domain::product::{Product, ProductId, ProductIdentifier};
    use crate::errors::StoreError;

    fn ids(values: &[u32]) -> Vec<ProductId> {
        values.iter().copied().map(ProductId).collect()
    }

    #[test]
    fn membership_is_correct_for_unsorted_insertion_order() {
        let mut inventory = Inventory::new();
        inventory
            .add_multiple(
                &["Mango", "Apple", "Grape", "Banana", "Tangerines"],
                &ids(&[10, 1, 7, 2, 4]),
            )
            .expect("lengths match");

        for present in [1, 2, 4, 7, 10] {
            assert!(inventory.contains(ProductId(present)), "expected {present} to be present");
        }
        for absent in [0, 3, 5, 6, 8, 9, 11] {
            assert!(!inventory.contains(ProductId(absent)), "expected {absent} to be absent");
        }
    }

    #[test]
    fn add_then_delete_by_id_toggles_membership() {
        let mut inventory = Inventory::new();
        inventory.add_product("Pear", ProductId(6)).expect("valid product");
        assert!(inventory.contains(ProductId(6)));

        let removed = inventory.remove(&ProductIdentifier::Id(ProductId(6))).expect("present");
        assert_eq!(removed, Product { id: ProductId(6), name: "Pear".to_string() });
        assert!(!inventory.contains(ProductId(6)));
        assert!(inventory.is_empty());
    }

    #[test]
    fn add_then_delete_by_name_toggles_membership() {
        let mut inventory = Inventory::new();
        inventory.add_product("Jackfruit", ProductId(9)).expect("valid product");

        inventory.remove(&ProductIdentifier::parse("Jackfruit")).expect("present");
        assert!(!inventory.contains(ProductId(9)));
    }

    #[test]
    fn overwriting_an_id_keeps_a_single_index_entry() {
        let mut inventory = Inventory::new();
        inventory.add_product("Apple", ProductId(1)).expect("valid product");
        inventory.add_product("Green Apple", ProductId(1)).expect("valid product");

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(ProductId(1)), Some("Green Apple"));

        inventory.remove(&ProductIdentifier::Id(ProductId(1))).expect("present");
        assert!(!inventory.contains(ProductId(1)));
    }

    #[test]
    fn empty_name_or_zero_id_is_rejected() {
        let mut inventory = Inventory::new();

        assert!(matches!(
            inventory.add_product("   ", ProductId(3)),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            inventory.add_product("Orange", ProductId(0)),
            Err(StoreError::Validation(_))
        ));
        assert!(inventory.is_empty());
    }

    #[test]
    fn mismatched_lengths_leave_inventory_untouched() {
        let mut inventory = Inventory::new();
        inventory.add_product("Apple", ProductId(1)).expect("valid product");
        let before = inventory.clone();

        let result = inventory.add_multiple(&["Orange", "Pear"], &ids(&[3]));

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(inventory, before);
    }

    #[test]
    fn bulk_insert_applies_valid_pairs_and_reports_invalid_ones() {
        let mut inventory = Inventory::new();

        let report = inventory
            .add_multiple(&["Apple", "", "Orange"], &ids(&[1, 2, 3]))
            .expect("lengths match");

        assert_eq!(report.applied, 2);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].position, 1);
        assert!(!report.is_complete());
        assert!(inventory.contains(ProductId(1)));
        assert!(!inventory.contains(ProductId(2)));
        assert!(inventory.contains(ProductId(3)));
    }

    #[test]
    fn bulk_insert_counts_overwrites_as_applied() {
        let mut inventory = Inventory::new();
        inventory.add_product("Apple", ProductId(1)).expect("valid product");

        let report = inventory
            .add_multiple(&["Green Apple", "Orange"], &ids(&[1, 3]))
            .expect("lengths match");

        assert_eq!(report.applied, 2);
        assert!(report.is_complete());
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.get(ProductId(1)), Some("Green Apple"));
    }

    #[test]
    fn name_delete_removes_only_the_lowest_matching_id() {
        let mut inventory = Inventory::new();
        inventory.add_multiple(&["Grape", "Grape"], &ids(&[8, 7])).expect("lengths match");

        let removed = inventory.remove(&ProductIdentifier::parse("Grape")).expect("present");

        assert_eq!(removed.id, ProductId(7));
        assert!(inventory.contains(ProductId(8)));
    }

    #[test]
    fn deleting_missing_product_reports_not_found() {
        let mut inventory = Inventory::new();
        inventory.add_product("Apple", ProductId(1)).expect("valid product");

        let by_id = inventory.remove(&ProductIdentifier::parse("5"));
        let by_name = inventory.remove(&ProductIdentifier::parse("Kiwi"));

        assert!(matches!(by_id, Err(StoreError::NotFound { .. })));
        assert!(matches!(by_name, Err(StoreError::NotFound { .. })));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn listing_is_sorted_by_product_id() {
        let mut inventory = Inventory::new();
        inventory
            .add_multiple(&["Mango", "Apple", "Grape"], &ids(&[10, 1, 7]))
            .expect("lengths match");

        assert_eq!(inventory.to_string(), "1: Apple\n7: Grape\n10: Mango");
    }
}
