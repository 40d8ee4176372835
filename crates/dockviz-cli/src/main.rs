mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::commands::CommandStatus;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("🚀 DockViz CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Histogram(args) => {
            info!("Dispatching to 'histogram' command.");
            commands::histogram::run(args)
        }
        Commands::Bars(args) => {
            info!("Dispatching to 'bars' command.");
            commands::bars::run(args)
        }
        Commands::Summary(args) => {
            info!("Dispatching to 'summary' command.");
            commands::summary::run(args)
        }
    };

    match &command_result {
        Ok(CommandStatus::Completed) => info!("✅ Command completed successfully."),
        Ok(CommandStatus::NoData) => info!("Command finished without data; nothing was produced."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result.map(|_| ())
}
