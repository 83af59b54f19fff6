//! Interactive prompt mode

use std::io::{self, BufRead, Write};
use std::time::Instant;

use grocer_core::config::SearchConfig;
use grocer_core::{FleetSearch, GroceryStore, ProductId};
use tokio::runtime::Runtime;

use crate::commands::{current_thread_runtime, CommandResult, GlobalOptions};
use crate::fixtures;

pub const WELCOME: &str = "\
Welcome to the grocery chain command line interface!
Look up any fruit product by number and we will tell you which of our stores stock it.
Every store is searched at once, so the answer is as fast as the slowest store.

Here's a list of commands you can use to interact with this interface:
'l': List all the products and their product numbers
'q': Quit the interface
[product number]: Returns a list of stores with that item";

pub const PROMPT: &str = "\nEnter your input here: ";
pub const FAREWELL: &str = "\nThanks for visiting!";
pub const INVALID_INPUT: &str = "\nPlease enter a valid input.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    List,
    Quit,
    Search(ProductId),
    Invalid,
}

impl Input {
    /// Product numbers must be plain digits within the configured range.
    pub fn parse(line: &str, search: &SearchConfig) -> Self {
        let line = line.trim();
        match line {
            "l" => Self::List,
            "q" => Self::Quit,
            _ if !line.is_empty() && line.bytes().all(|byte| byte.is_ascii_digit()) => {
                match line.parse::<u32>() {
                    Ok(value) if search.accepts(value) => Self::Search(ProductId(value)),
                    _ => Self::Invalid,
                }
            }
            _ => Self::Invalid,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self { text: text.into(), quit: false }
    }
}

pub struct Session {
    fleet: Vec<GroceryStore>,
    search: FleetSearch,
}

impl Session {
    pub fn new(fleet: Vec<GroceryStore>, search: FleetSearch) -> Self {
        Self { fleet, search }
    }

    pub fn fleet(&self) -> &[GroceryStore] {
        &self.fleet
    }

    pub async fn respond(&self, line: &str) -> Reply {
        match Input::parse(line, self.search.config()) {
            Input::List => Reply::say(format!("\n{}", fixtures::catalog_listing())),
            Input::Quit => Reply { text: FAREWELL.to_string(), quit: true },
            Input::Invalid => Reply::say(INVALID_INPUT),
            Input::Search(product_id) => {
                let started = Instant::now();
                let outcome = self.search.search(product_id, &self.fleet).await;
                let seconds = started.elapsed().as_secs_f64();
                match outcome {
                    Ok(names) => Reply::say(render_hits(&names, seconds)),
                    Err(error) => {
                        tracing::warn!(
                            event_name = "cli.interactive.search_failed",
                            product_id = product_id.0,
                            error = %error,
                            "search failed; prompting again"
                        );
                        Reply::say(format!("\n{}", error.user_message()))
                    }
                }
            }
        }
    }
}

pub fn render_hits(names: &[String], seconds: f64) -> String {
    if names.is_empty() {
        format!("None of our stores have the item. It took {seconds:.4} seconds to search.")
    } else {
        format!(
            "The {} stores have the item. It took {seconds:.4} seconds to find it.",
            names.join(", ")
        )
    }
}

/// Runs the prompt loop until `q` or end of input.
pub fn drive<R: BufRead, W: Write>(
    session: &Session,
    runtime: &Runtime,
    mut input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    writeln!(output, "{WELCOME}")?;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        // Undecodable bytes become U+FFFD and parse as invalid input.
        let mut raw = Vec::new();
        if input.read_until(b'\n', &mut raw)? == 0 {
            writeln!(output, "{FAREWELL}")?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&raw);

        let reply = runtime.block_on(session.respond(&line));
        writeln!(output, "{}", reply.text)?;
        if reply.quit {
            return Ok(());
        }
    }
}

pub fn run(global: &GlobalOptions) -> CommandResult {
    let config = match global.load_config() {
        Ok(config) => config,
        Err(error) => return CommandResult::config_failure("interactive", error),
    };

    let runtime = match current_thread_runtime() {
        Ok(runtime) => runtime,
        Err(error) => return CommandResult::runtime_failure("interactive", error),
    };

    let fleet = match fixtures::sample_fleet() {
        Ok(fleet) => fleet,
        Err(error) => {
            return CommandResult::failure("interactive", "fixture", error.to_string(), 5);
        }
    };

    let session = Session::new(fleet, FleetSearch::new(config.search));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match drive(&session, &runtime, stdin.lock(), &mut stdout) {
        Ok(()) => CommandResult { exit_code: 0, output: String::new() },
        Err(error) => CommandResult::failure("interactive", "io", error.to_string(), 3),
    }
}
