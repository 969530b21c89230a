//! # CLI Structure and Argument Parsing
//!
//! Command-line interface for `xwdoc`, built with `clap` derive macros.
//!
//! ```bash
//! # Build both trees next to the sources in ./doc
//! xwdoc build doc
//!
//! # Build into a separate directory with an explicit configuration
//! xwdoc build doc --out target/help --config doc/xwdoc.toml
//!
//! # Verify the generated website
//! xwdoc check-links doc/html
//! ```
//!
//! Global options (`--verbose`, `--quiet`, `--no-color`) apply to every
//! command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::FormatArg;

/// Main CLI structure for the `xwdoc` command
#[derive(Parser, Clone, Debug)]
#[command(name = "xwdoc")]
#[command(version)]
#[command(about = "xwdoc - Build the XWord help file and website from Markdown", long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Convert the Markdown sources into the compiled-help tree and the website
    Build(BuildArgs),

    /// Report internal links that point to missing pages or anchors
    #[command(name = "check-links")]
    CheckLinks(CheckLinksArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// Output format selected by the command, if it has one.
    pub const fn format_arg(&self) -> Option<&FormatArg> {
        match self {
            Self::Build(args) => Some(&args.format),
            Self::CheckLinks(args) => Some(&args.format),
            Self::Completions { .. } => None,
        }
    }
}

/// Arguments for `xwdoc build`
#[derive(Args, Clone, Debug)]
pub struct BuildArgs {
    /// Directory holding the Markdown sources and assets
    #[arg(value_name = "SOURCE", default_value = ".")]
    pub source: PathBuf,

    /// Directory receiving the output trees (defaults to SOURCE)
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Configuration file (defaults to SOURCE/xwdoc.toml when present)
    #[arg(short = 'c', long, value_name = "FILE", env = "XWDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[command(flatten)]
    pub format: FormatArg,
}

/// Arguments for `xwdoc check-links`
#[derive(Args, Clone, Debug)]
pub struct CheckLinksArgs {
    /// Directory of generated HTML pages
    #[arg(value_name = "DIR", default_value = "html")]
    pub dir: PathBuf,

    /// Output format
    #[command(flatten)]
    pub format: FormatArg,
}
