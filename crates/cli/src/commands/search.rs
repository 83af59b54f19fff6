use grocer_core::{FleetSearch, ProductId};

use crate::commands::interactive::Input;
use crate::commands::{current_thread_runtime, CommandResult, GlobalOptions};
use crate::fixtures;

pub fn run(global: &GlobalOptions, raw_product_id: &str) -> CommandResult {
    let config = match global.load_config() {
        Ok(config) => config,
        Err(error) => return CommandResult::config_failure("search", error),
    };

    let product_id = match Input::parse(raw_product_id, &config.search) {
        Input::Search(product_id) => product_id,
        _ => {
            return CommandResult::failure(
                "search",
                "invalid_input",
                format!(
                    "`{}` is not a product number in {}..={}",
                    raw_product_id.trim(),
                    config.search.min_product_id,
                    config.search.max_product_id
                ),
                4,
            );
        }
    };

    let runtime = match current_thread_runtime() {
        Ok(runtime) => runtime,
        Err(error) => return CommandResult::runtime_failure("search", error),
    };

    let result = runtime.block_on(async {
        let fleet =
            fixtures::sample_fleet().map_err(|error| ("fixture", error.to_string(), 5u8))?;
        FleetSearch::new(config.search)
            .search(product_id, &fleet)
            .await
            .map_err(|error| (error.class(), error.to_string(), 5u8))
    });

    match result {
        Ok(names) => CommandResult::success("search", summarize(product_id, &names)),
        Err((error_class, message, exit_code)) => {
            CommandResult::failure("search", error_class, message, exit_code)
        }
    }
}

fn summarize(product_id: ProductId, names: &[String]) -> String {
    if names.is_empty() {
        format!("no stores stock product {product_id}")
    } else {
        format!("product {product_id} is stocked at: {}", names.join(", "))
    }
}
