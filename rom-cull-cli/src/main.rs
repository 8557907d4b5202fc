//! rom-cull CLI
//!
//! Command-line interface for finding duplicate ROM titles and keeping the
//! best release of each.

mod cli_types;
mod commands;
mod error;
mod logging;
mod spinner;

use clap::Parser;

use cli_types::{CacheAction, Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Clean {
            regions,
            delete,
            scan,
        } => commands::clean::run_clean(cli.root, regions, delete, scan, quiet),
        Commands::Tags { scan } => commands::tags::run_tags(cli.root, scan, quiet),
        Commands::Cache { action, cache_file } => match action {
            CacheAction::Show => commands::cache::run_cache_show(cache_file),
            CacheAction::Clear => commands::cache::run_cache_clear(cache_file),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}
