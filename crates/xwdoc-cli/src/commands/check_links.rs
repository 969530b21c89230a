//! Check-links command implementation - verify a generated website
//!
//! ```bash
//! xwdoc check-links                  # Check ./html
//! xwdoc check-links doc/html         # Check a specific tree
//! xwdoc check-links --format json    # Machine-readable report
//! ```
//!
//! Exits with code 4 when any broken link is found.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use xwdoc_core::{LinkChecker, LinkReport};

use crate::error::CliError;
use crate::output::{OutputFormat, print_json};

/// Execute the check-links command.
///
/// # Errors
///
/// Returns an error if `dir` cannot be read, or a [`CliError`] with the
/// broken-links category when broken links exist.
pub fn execute(dir: &Path, format: OutputFormat) -> Result<()> {
    let report = LinkChecker::check_dir(dir)
        .with_context(|| format!("failed to check links in {}", dir.display()))?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_text(&report),
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::broken_links(anyhow!(
            "{} broken link(s) in {}",
            report.broken.len(),
            dir.display()
        ))
        .into())
    }
}

fn print_text(report: &LinkReport) {
    if report.is_clean() {
        println!("{}", "No broken links".green());
        return;
    }
    println!("{}", "Broken links:".red().bold());
    for link in &report.broken {
        println!("{} [{}]", link.target, link.referenced_by.join(", "));
    }
}
