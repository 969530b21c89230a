//! Error types and handling for xwdoc-core operations.
//!
//! This module provides the error type shared by every stage of the
//! documentation build: configuration loading, Markdown conversion, output
//! assembly and link checking.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: missing source directory, unreadable files, unwritable output
//! - **Configuration Errors**: malformed `xwdoc.toml`, invalid values or
//!   output directories that overlap the inputs
//!
//! Configuration mismatches that do not stop the build (a page missing from the
//! contents order, for instance) are *not* errors; they are reported as
//! [`BuildWarning`](crate::BuildWarning)s.
//!
//! ```rust
//! use xwdoc_core::{Error, Result};
//!
//! fn run() -> Result<()> {
//!     Err(Error::NotFound("source directory 'doc'".into()))
//! }
//!
//! match run() {
//!     Err(e) => assert_eq!(e.category(), "not_found"),
//!     Ok(()) => unreachable!(),
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for xwdoc-core operations.
///
/// All fallible public functions return `Result<T, Error>`. Every error that
/// touches the filesystem keeps the underlying `std::io::Error` in its source
/// chain.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed without a more specific path attached.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O operation on a specific file or directory failed.
    ///
    /// Used for every read/write the build performs so the operator can see
    /// which path was at fault.
    #[error("IO error at {}: {source}", path.display())]
    FileAccess {
        /// Path that could not be read, written, created or removed.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Invalid TOML syntax in `xwdoc.toml`
    /// - Empty output directory names
    /// - Output directories that overlap the sources, the assets or each other
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource was not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl Error {
    /// Attach a path to an I/O failure.
    ///
    /// A missing path becomes [`Error::NotFound`] so callers (and the CLI's
    /// exit codes) can tell "nothing there" apart from "cannot touch it".
    pub fn at_path(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path.display().to_string());
        }
        Self::FileAccess { path, source }
    }

    /// Get the error category as a string identifier.
    ///
    /// - `"io"` - File system and I/O operations
    /// - `"config"` - Configuration and settings
    /// - `"not_found"` - Missing files or directories
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) | Self::FileAccess { .. } => "io",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
        }
    }
}

/// Convenience type alias for Results with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_path_becomes_not_found() {
        // Given: an io::Error of kind NotFound
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");

        // When: attaching a path
        let err = Error::at_path("doc/index.md", err);

        // Then: the error is categorized as not found and names the path
        assert_eq!(err.category(), "not_found");
        assert!(err.to_string().contains("doc/index.md"));
    }

    #[test]
    fn test_other_io_keeps_source_chain() {
        let err = Error::at_path(
            "out/chm",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.category(), "io");
        assert!(err.to_string().contains("out/chm"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_toml_errors_are_config_errors() {
        let err: Error = toml::from_str::<toml::Value>("not [[[ valid")
            .unwrap_err()
            .into();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_categories() {
        let cases = vec![
            (Error::Io(io::Error::other("x")), "io"),
            (Error::Config("x".into()), "config"),
            (Error::NotFound("x".into()), "not_found"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.category(), expected, "wrong category for {error}");
        }
    }
}
