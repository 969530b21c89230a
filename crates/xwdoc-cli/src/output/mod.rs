//! # Output Formatting
//!
//! Commands print either human-readable text or a single JSON document.
//!
//! ```bash
//! # Human-readable output (default on a terminal)
//! xwdoc build doc --format text
//!
//! # JSON for scripts (default when stdout is piped)
//! xwdoc check-links doc/html --format json | jq '.broken[].target'
//! ```
//!
//! Logs always go to stderr, so stdout carries only the report.

use clap::{Args, ValueEnum};
use is_terminal::IsTerminal;
use serde::Serialize;

/// Output format for command reports.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default for terminals).
    #[default]
    Text,
    /// Pretty-printed JSON (default for pipes).
    Json,
}

impl OutputFormat {
    /// Check if this format is machine-readable.
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Shared `--format` argument.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatArg {
    /// Output format (text, json). Defaults to text for terminals, json for pipes.
    #[arg(short = 'f', long = "format", value_enum, env = "XWDOC_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,
}

impl FormatArg {
    /// Returns the effective output format.
    ///
    /// When no format was given, output to a terminal is text and piped
    /// output is JSON.
    #[must_use]
    pub fn resolve(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        if std::io::stdout().is_terminal() {
            OutputFormat::Text
        } else {
            OutputFormat::Json
        }
    }
}

/// Print `value` as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
