//! Build command implementation - convert the help sources
//!
//! ```bash
//! xwdoc build doc                      # Write doc/chm and doc/html
//! xwdoc build doc --out target/help    # Write target/help/{chm,html}
//! xwdoc build doc --format json        # Machine-readable report
//! ```

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;
use xwdoc_core::{BuildReport, DocsBuilder, DocsConfig};

use crate::cli::BuildArgs;
use crate::output::{OutputFormat, print_json};

/// Execute the build command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the build fails.
pub fn execute(args: &BuildArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let config = load_config(args)?;

    let mut builder = DocsBuilder::new(&config, &args.source);
    if let Some(out) = &args.out {
        builder = builder.with_output_dir(out);
    }
    let report = builder
        .build()
        .with_context(|| format!("failed to build documentation from {}", args.source.display()))?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            if !quiet {
                print_text(&report);
            }
        },
    }
    Ok(())
}

fn load_config(args: &BuildArgs) -> Result<DocsConfig> {
    match &args.config {
        Some(path) => {
            debug!("using config {}", path.display());
            DocsConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))
        },
        None => DocsConfig::load_or_default(&args.source)
            .with_context(|| format!("failed to load config from {}", args.source.display())),
    }
}

fn print_text(report: &BuildReport) {
    println!(
        "{} {} page(s), {} contents entries, {} image(s)",
        "Built".green().bold(),
        report.documents.len(),
        report.contents_entries,
        report.images
    );
    println!("  compiled help: {}", report.chm_dir.display());
    println!("  website:       {}", report.html_dir.display());
    if !report.warnings.is_empty() {
        println!("{}", format!("{} warning(s):", report.warnings.len()).yellow());
        for warning in &report.warnings {
            println!("  • {warning}");
        }
    }
}
