//! Command implementations for the xwdoc CLI
//!
//! Each command lives in its own submodule.

mod build;
mod check_links;
mod completions;

pub use build::execute as build_docs;
pub use check_links::execute as check_links;
pub use completions::generate;
