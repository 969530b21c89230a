//! xwdoc CLI library
//!
//! Exposes [`run`] for the `xwdoc` binary. Command implementations live in
//! their own modules; this file only parses arguments, sets up logging and
//! dispatches.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use cli::{Cli, Commands};
use utils::initialize_logging;

/// Parse the command line and execute the selected command.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized or the command fails.
/// Use [`error::exit_code_from_error`] to map it to a process exit code.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(&cli)?;
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Build(args) => commands::build_docs(args, args.format.resolve(), cli.quiet),
        Commands::CheckLinks(args) => commands::check_links(&args.dir, args.format.resolve()),
        Commands::Completions { shell } => {
            commands::generate(*shell);
            Ok(())
        },
    }
}
