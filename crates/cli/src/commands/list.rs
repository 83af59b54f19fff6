use crate::commands::CommandResult;
use crate::fixtures;

pub fn run() -> CommandResult {
    CommandResult::success("list", fixtures::catalog_listing())
}
