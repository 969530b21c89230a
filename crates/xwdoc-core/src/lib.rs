//! # xwdoc-core
//!
//! Core functionality for xwdoc - the help-documentation builder for the
//! XWord crossword application.
//!
//! This crate turns a directory of Markdown help sources into two output
//! trees: a compiled-help source tree (pages, `help.hhp` project file and
//! `contents.hhc` sitemap, ready for the help compiler) and a browsable
//! website whose pages carry a collapsible navigation sidebar. It also
//! checks the internal links of a generated tree.
//!
//! ## Architecture
//!
//! - **Configuration**: contents order, page chrome, asset and output names
//! - **Conversion**: Markdown rendering with stable heading anchors
//! - **Contents**: an arena tree built from heading levels
//! - **Generation**: page chrome, sidebar, project and sitemap files
//! - **Build**: the pipeline tying the above together
//! - **Link checking**: offline verification of anchors and pages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use xwdoc_core::{DocsBuilder, DocsConfig, LinkChecker, Result};
//!
//! let source = Path::new("doc");
//! let config = DocsConfig::load_or_default(source)?;
//! let report = DocsBuilder::new(&config, source).build()?;
//! println!("Built {} pages", report.documents.len());
//!
//! let links = LinkChecker::check_dir(&report.html_dir)?;
//! assert!(links.is_clean());
//! # Ok::<(), xwdoc_core::Error>(())
//! ```

/// The build pipeline
pub mod build;
/// Configuration loading and defaults
pub mod config;
/// Table-of-contents arena tree
pub mod contents;
/// Markdown conversion with heading anchors
pub mod convert;
/// Error types and result aliases
pub mod error;
/// Filesystem helpers
pub mod files;
/// Output tree generation
pub mod generate;
/// Heading text and anchor ids
pub mod heading;
/// Offline link checker
pub mod linkcheck;
/// Link classification
pub mod links;

// Re-export commonly used types
pub use build::{BuildContext, BuildReport, BuildWarning, DocsBuilder};
pub use config::{
    AssetsConfig, CONFIG_FILE_NAME, ContentsConfig, DocsConfig, OutputConfig, PageConfig,
    ProjectConfig,
};
pub use contents::{ContentsBuilder, ContentsNode, ContentsTree, NodeId};
pub use convert::{ConvertedDocument, MarkdownConverter};
pub use error::{Error, Result};
pub use generate::OutputAssembler;
pub use heading::{AnchorAllocator, Heading};
pub use linkcheck::{BrokenLink, LinkChecker, LinkReport};
