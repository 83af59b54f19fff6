pub mod inventory;
pub mod product;
pub mod store;
