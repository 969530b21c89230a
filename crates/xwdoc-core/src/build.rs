//! The documentation build pipeline.
//!
//! [`DocsBuilder`] drives one run end to end:
//!
//! 1. discover `*.md` sources in the source directory (sorted by name);
//! 2. convert each document, collecting its headings;
//! 3. build one contents subtree per document and attach the roots in the
//!    configured contents order;
//! 4. write the compiled-help tree and the website tree.
//!
//! The state shared between those steps lives in a [`BuildContext`] that is
//! created per run and handed to each step explicitly.
//!
//! Configuration mismatches never stop a build. A source document missing
//! from the contents order is still converted and written (it just has no
//! contents entry), and an order entry with no matching source is skipped.
//! Both are logged with `warn!` and returned as [`BuildWarning`]s.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::DocsConfig;
use crate::contents::{ContentsTree, NodeId};
use crate::convert::{ConvertedDocument, MarkdownConverter};
use crate::files;
use crate::generate::{OutputAssembler, PageChrome};
use crate::{Error, Result};

/// Extension of the Markdown sources.
pub const SOURCE_EXTENSION: &str = "md";

/// A non-fatal configuration mismatch found during a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    /// A source document that is not listed in the contents order.
    NotInContents {
        /// Document name (file stem).
        name: String,
    },
    /// A contents order entry with no matching source document.
    MissingDocument {
        /// Name listed in the contents order.
        name: String,
    },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInContents { name } => {
                write!(f, "document '{name}' is not listed in the contents order")
            },
            Self::MissingDocument { name } => {
                write!(f, "contents entry '{name}' has no matching document")
            },
        }
    }
}

/// Summary of a finished build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    /// Directory the sources were read from.
    pub source_dir: PathBuf,
    /// Compiled-help output directory.
    pub chm_dir: PathBuf,
    /// Website output directory.
    pub html_dir: PathBuf,
    /// Converted documents, sorted by name.
    pub documents: Vec<ConvertedDocument>,
    /// Total number of contents entries reachable from the roots.
    pub contents_entries: usize,
    /// Number of image files listed in the project file.
    pub images: usize,
    /// Configuration mismatches, in the order they were found.
    pub warnings: Vec<BuildWarning>,
}

impl BuildReport {
    /// Output page names, in project-file order.
    pub fn pages(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.page.as_str()).collect()
    }
}

/// Per-run state shared by the build steps.
#[derive(Debug, Default)]
pub struct BuildContext {
    /// Converted documents, sorted by name.
    pub documents: Vec<ConvertedDocument>,
    /// Contents tree with every document subtree.
    pub tree: ContentsTree,
    /// Subtree root of each document, by document name.
    pub roots: HashMap<String, NodeId>,
    /// Warnings collected so far.
    pub warnings: Vec<BuildWarning>,
}

impl BuildContext {
    fn warn(&mut self, warning: BuildWarning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }
}

/// Builds both documentation trees from a source directory.
///
/// ```rust,no_run
/// use std::path::Path;
/// use xwdoc_core::{DocsBuilder, DocsConfig};
///
/// let config = DocsConfig::load_or_default(Path::new("doc"))?;
/// let report = DocsBuilder::new(&config, "doc").build()?;
/// for warning in &report.warnings {
///     eprintln!("warning: {warning}");
/// }
/// # Ok::<(), xwdoc_core::Error>(())
/// ```
pub struct DocsBuilder<'a> {
    config: &'a DocsConfig,
    source_dir: PathBuf,
    output_dir: PathBuf,
}

impl<'a> DocsBuilder<'a> {
    /// Create a builder that writes its output next to the sources.
    pub fn new(config: &'a DocsConfig, source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        Self {
            config,
            output_dir: source_dir.clone(),
            source_dir,
        }
    }

    /// Write the output trees under `output_dir` instead.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Compiled-help output directory.
    pub fn chm_dir(&self) -> PathBuf {
        self.output_dir.join(&self.config.output.chm_dir)
    }

    /// Website output directory.
    pub fn html_dir(&self) -> PathBuf {
        self.output_dir.join(&self.config.output.html_dir)
    }

    /// Run the build.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the source directory or a required
    /// asset is missing, [`Error::Config`] when an output directory would
    /// wipe a source or asset (or the other output tree), and an I/O error for any failed read or write.
    pub fn build(&self) -> Result<BuildReport> {
        if !self.source_dir.is_dir() {
            return Err(Error::NotFound(format!(
                "source directory '{}'",
                self.source_dir.display()
            )));
        }
        let chm_dir = self.chm_dir();
        let html_dir = self.html_dir();
        self.guard_outputs(&chm_dir, &html_dir)?;

        let converter = MarkdownConverter::new(&self.config.contents);
        let mut ctx = BuildContext::default();
        self.convert_sources(&converter, &mut ctx)?;
        self.attach_roots(&mut ctx);

        let links_html = converter.render(&self.config.page.links);
        let chrome = PageChrome::new(links_html, &self.config.assets);
        let assembler = OutputAssembler::new(self.config, chrome);
        assembler.write_compiled_help(&chm_dir, &self.source_dir, &ctx.documents, &ctx.tree)?;
        assembler.write_website(&html_dir, &self.source_dir, &ctx.documents, &ctx.tree)?;

        let images = files::visible_entries(&self.source_dir.join(&self.config.assets.images_dir))?
            .len();
        let contents_entries = ctx.tree.walk_all().len();
        info!(
            "built {} page(s), {} contents entries, {} warning(s)",
            ctx.documents.len(),
            contents_entries,
            ctx.warnings.len()
        );

        Ok(BuildReport {
            source_dir: self.source_dir.clone(),
            chm_dir,
            html_dir,
            documents: ctx.documents,
            contents_entries,
            images,
            warnings: ctx.warnings,
        })
    }

    fn convert_sources(&self, converter: &MarkdownConverter<'_>, ctx: &mut BuildContext) -> Result<()> {
        for (name, path) in files::files_with_extension(&self.source_dir, SOURCE_EXTENSION)? {
            info!("converting {}", path.display());
            let source = files::read_text(&path)?;
            let doc = converter.convert(&name, &source);
            debug!("{}: {} heading(s)", doc.page, doc.headings.len());

            if !self.config.contents.is_listed(&name) {
                ctx.warn(BuildWarning::NotInContents { name: name.clone() });
            }
            let root = ctx.tree.add_document(&doc.title, &doc.page, &doc.headings);
            ctx.roots.insert(name, root);
            ctx.documents.push(doc);
        }
        Ok(())
    }

    fn attach_roots(&self, ctx: &mut BuildContext) {
        for name in &self.config.contents.order {
            match ctx.roots.get(name) {
                Some(root) => ctx.tree.attach_root(*root),
                None => ctx.warn(BuildWarning::MissingDocument { name: name.clone() }),
            }
        }
    }

    /// Refuse output directories whose reset would delete an input or the
    /// other output tree.
    fn guard_outputs(&self, chm_dir: &Path, html_dir: &Path) -> Result<()> {
        let chm = absolute(chm_dir)?;
        let html = absolute(html_dir)?;
        if files::overlaps(&chm, &html) {
            return Err(Error::Config(format!(
                "output directories '{}' and '{}' overlap",
                chm_dir.display(),
                html_dir.display()
            )));
        }

        let source = absolute(&self.source_dir)?;
        let assets = &self.config.assets;
        let mut inputs = Vec::new();
        for asset in [&assets.images_dir, &assets.stylesheet, &assets.script] {
            if !asset.trim().is_empty() {
                inputs.push(self.source_dir.join(asset));
            }
        }
        for (_, path) in files::files_with_extension(&self.source_dir, SOURCE_EXTENSION)? {
            inputs.push(path);
        }

        for (dir, target) in [(chm_dir, &chm), (html_dir, &html)] {
            if source.starts_with(target) {
                return Err(Error::Config(format!(
                    "output directory '{}' would overwrite the source directory '{}'",
                    dir.display(),
                    self.source_dir.display()
                )));
            }
            for input in &inputs {
                if files::overlaps(&absolute(input)?, target) {
                    return Err(Error::Config(format!(
                        "output directory '{}' would overwrite '{}'",
                        dir.display(),
                        input.display()
                    )));
                }
            }
        }
        Ok(())
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(files::normalize(&std::path::absolute(path)?))
}
