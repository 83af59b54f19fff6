use std::time::Instant;

use futures::future::try_join_all;
use tracing::{info, warn};

use crate::config::SearchConfig;
use crate::domain::product::ProductId;
use crate::errors::SearchError;
use crate::lookup::ProductLookup;

/// Fans a membership check out to every store and gathers the answers.
///
/// All lookups are in flight at once, so total latency tracks the slowest
/// store. Results keep fleet order whatever order the lookups finish in. A
/// failed or timed-out lookup fails the whole search; outstanding lookups are
/// dropped, which is safe because lookups never mutate a store.
#[derive(Clone, Debug, Default)]
pub struct FleetSearch {
    config: SearchConfig,
}

impl FleetSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Names of the stores stocking `product_id`, in fleet order.
    pub async fn search<S: ProductLookup>(
        &self,
        product_id: ProductId,
        stores: &[S],
    ) -> Result<Vec<String>, SearchError> {
        if !self.config.accepts(product_id.0) {
            warn!(
                event_name = "search.fleet.rejected",
                product_id = product_id.0,
                min_product_id = self.config.min_product_id,
                max_product_id = self.config.max_product_id,
                "product id outside searchable range"
            );
            return Err(SearchError::OutOfRange {
                product_id,
                min: self.config.min_product_id,
                max: self.config.max_product_id,
            });
        }

        let started = Instant::now();
        let gathered = try_join_all(stores.iter().map(|store| store.has_product(product_id)));

        let outcome = match self.config.timeout() {
            Some(limit) => match tokio::time::timeout(limit, gathered).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    let timeout_ms = limit.as_millis() as u64;
                    warn!(
                        event_name = "search.fleet.timed_out",
                        product_id = product_id.0,
                        store_count = stores.len(),
                        timeout_ms,
                        "fleet search abandoned outstanding lookups"
                    );
                    return Err(SearchError::Timeout { timeout_ms });
                }
            },
            None => gathered.await,
        };

        let stocked = outcome.map_err(|error| {
            warn!(
                event_name = "search.fleet.lookup_failed",
                product_id = product_id.0,
                error = %error,
                "store lookup failed; search aborted"
            );
            SearchError::from(error)
        })?;

        let names: Vec<String> = stores
            .iter()
            .zip(stocked)
            .filter_map(|(store, found)| found.then(|| store.store_name().to_string()))
            .collect();

        info!(
            event_name = "search.fleet.completed",
            product_id = product_id.0,
            store_count = stores.len(),
            hit_count = names.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fleet search completed"
        );

        Ok(names)
    }
}
