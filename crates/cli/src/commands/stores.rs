use crate::commands::{current_thread_runtime, CommandResult};
use crate::fixtures;

/// Renders every sample store's inventory, one block per store.
pub fn run() -> CommandResult {
    let fleet = match fixtures::sample_fleet() {
        Ok(fleet) => fleet,
        Err(error) => return CommandResult::failure("stores", "fixture", error.to_string(), 5),
    };

    let runtime = match current_thread_runtime() {
        Ok(runtime) => runtime,
        Err(error) => return CommandResult::runtime_failure("stores", error),
    };

    let blocks = runtime.block_on(async {
        let mut blocks = Vec::with_capacity(fleet.len());
        for store in &fleet {
            blocks.push(store.describe().await);
        }
        blocks
    });

    CommandResult::success("stores", blocks.join("\n\n"))
}
