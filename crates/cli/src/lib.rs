pub mod commands;
pub mod fixtures;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::GlobalOptions;

#[derive(Debug, Parser)]
#[command(
    name = "grocer",
    about = "Find which stores stock a product",
    long_about = "Search every store in the grocery fleet for a product number at once. \
                  Without a subcommand an interactive prompt is started.",
    after_help = "Examples:\n  grocer\n  grocer search 7\n  grocer stores\n  grocer config"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Load configuration from this TOML file"
    )]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_name = "LEVEL", help = "Override the configured log level")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Start the interactive product prompt (default)")]
    Interactive,
    #[command(about = "Search the sample fleet for one product number")]
    Search {
        #[arg(value_name = "PRODUCT_ID")]
        product_id: String,
    },
    #[command(about = "List known product names and numbers")]
    List,
    #[command(about = "Show each sample store's inventory")]
    Stores,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let global = GlobalOptions { config_path: cli.config, log_level: cli.log_level };

    if let Ok(config) = global.load_config() {
        logging::init(&config.logging);
    }

    let result = match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => commands::interactive::run(&global),
        Command::Search { product_id } => commands::search::run(&global, &product_id),
        Command::List => commands::list::run(),
        Command::Stores => commands::stores::run(),
        Command::Config => commands::config::run(&global),
    };

    if !result.output.is_empty() {
        println!("{}", result.output);
    }
    ExitCode::from(result.exit_code)
}
