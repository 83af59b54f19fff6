//! Sample fleet and catalog seeded at startup.

use grocer_core::{GroceryStore, Inventory, ProductId, StoreError};

/// Known product names with their product numbers.
pub const CATALOG: [(&str, u32); 10] = [
    ("Apple", 1),
    ("Banana", 2),
    ("Orange", 3),
    ("Tangerines", 4),
    ("Canteloupe", 5),
    ("Pear", 6),
    ("Grape", 7),
    ("Pineapple", 8),
    ("Jackfruit", 9),
    ("Mango", 10),
];

pub fn catalog_listing() -> String {
    CATALOG.iter().map(|(name, id)| format!("{name}: {id}")).collect::<Vec<_>>().join("\n")
}

pub fn sample_fleet() -> Result<Vec<GroceryStore>, StoreError> {
    Ok(vec![
        seeded_store(
            "Nueces St",
            &["Apple", "Banana", "Tangerines", "Grape", "Mango"],
            &[1, 2, 4, 7, 10],
        )?,
        seeded_store(
            "Rio Grande",
            &["Apple", "Orange", "Tangerines", "Pear", "Grape", "Pineapple", "Jackfruit"],
            &[1, 3, 4, 6, 7, 8, 9],
        )?,
        seeded_store(
            "Dean Keaton",
            &["Canteloupe", "Pear", "Grape", "Pineapple", "Jackfruit", "Mango"],
            &[5, 6, 7, 8, 9, 10],
        )?,
    ])
}

fn seeded_store(name: &str, products: &[&str], ids: &[u32]) -> Result<GroceryStore, StoreError> {
    let ids: Vec<ProductId> = ids.iter().copied().map(ProductId).collect();
    let mut inventory = Inventory::new();
    let report = inventory.add_multiple(products, &ids)?;
    if let Some(rejected) = report.rejected.into_iter().next() {
        return Err(rejected.error);
    }
    Ok(GroceryStore::with_inventory(name, inventory))
}
