pub mod config;
pub mod domain;
pub mod errors;
pub mod lookup;
pub mod search;

pub use config::{AppConfig, ConfigError, LoadOptions, SearchConfig};
pub use domain::inventory::{BulkInsert, Inventory, RejectedProduct};
pub use domain::product::{Product, ProductId, ProductIdentifier};
pub use domain::store::GroceryStore;
pub use errors::{LookupError, SearchError, StoreError};
pub use lookup::ProductLookup;
pub use search::FleetSearch;
