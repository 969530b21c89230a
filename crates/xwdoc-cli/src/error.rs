//! CLI error handling with semantic exit codes.
//!
//! Failures map to exit codes by category so build scripts can tell a bad
//! invocation from a missing directory or a broken link.
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments or configuration |
//! | 3 | `NotFound` | Source directory, file or asset not found |
//! | 4 | `BrokenLinks` | `check-links` found broken links |
//! | 5 | `Io` | Reading or writing a file failed |
//!
//! ```bash
//! xwdoc check-links doc/html
//! case $? in
//!     0) echo "clean" ;;
//!     4) echo "broken links" ;;
//!     *) echo "other error" ;;
//! esac
//! ```

use std::fmt;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or configuration (exit code 2).
    Usage = 2,

    /// Requested resource not found (exit code 3).
    NotFound = 3,

    /// The link checker found broken links (exit code 4).
    BrokenLinks = 4,

    /// Filesystem failure (exit code 5).
    Io = 5,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::BrokenLinks => "broken links",
            Self::Io => "i/o error",
        }
    }

    /// Category for an error raised by `xwdoc-core`.
    #[must_use]
    pub fn from_core(err: &xwdoc_core::Error) -> Self {
        match err.category() {
            "config" => Self::Usage,
            "not_found" => Self::NotFound,
            "io" => Self::Io,
            _ => Self::Internal,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a broken-links error.
    pub fn broken_links(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::BrokenLinks, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// A `CliError` anywhere in the chain decides the code; otherwise the first
/// `xwdoc_core::Error` in the chain is categorized; anything else is internal.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return cli_err.exit_code();
        }
    }
    for cause in err.chain() {
        if let Some(core_err) = cause.downcast_ref::<xwdoc_core::Error>() {
            return ErrorCategory::from_core(core_err).exit_code();
        }
    }
    ErrorCategory::Internal.exit_code()
}
