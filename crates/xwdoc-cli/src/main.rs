//! xwdoc CLI - build the XWord help file and website from Markdown
//!
//! This is the main entry point for the xwdoc command-line interface.

use std::process::ExitCode;

use colored::Colorize;
use xwdoc_cli::error::exit_code_from_error;

fn main() -> ExitCode {
    match xwdoc_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
