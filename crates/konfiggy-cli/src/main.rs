//! Konfiggy CLI
//!
//! Resolves environment-qualified settings and connection strings from a
//! host configuration file.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use konfiggy_core::Konfiggy;

use cli::{Cli, Commands};
use commands::list::ListSelection;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Cli {
        verbose,
        config,
        tag_source,
        command,
    } = Cli::parse();

    if let Err(e) = logging::init(verbose) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(?command, "Parsed command line");

    let build = |requires_host_config: bool| -> Result<Konfiggy> {
        if requires_host_config && config.is_none() {
            return Err(CliError::user(
                "No host configuration file given; pass --config or set KONFIGGY_CONFIG",
            ));
        }
        commands::build_konfiggy(config.as_deref(), &tag_source)
    };

    match command {
        Commands::Get { key } => commands::run_get(&build(true)?, &key),
        Commands::Connection { name } => commands::run_connection(&build(true)?, &name),
        Commands::Tag => commands::run_tag(&build(false)?),
        Commands::List {
            connections,
            current,
            json,
        } => commands::run_list(&build(true)?, ListSelection { connections, current }, json),
        Commands::SetTag { tag, file } => commands::run_set_tag(&tag, file),
    }
}
