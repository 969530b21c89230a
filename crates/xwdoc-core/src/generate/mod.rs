//! Output assembly for the two documentation flavors.
//!
//! The assembler takes converted documents and the finished contents tree and
//! writes:
//!
//! - the **compiled-help** tree: flat pages, the project file, the sitemap
//!   contents file and the static assets;
//! - the **website** tree: the same pages with the navigation sidebar
//!   injected, plus the static assets.
//!
//! Both trees are deleted and recreated on every run; identical inputs produce
//! identical files.

mod manifest;
mod page;
mod sidebar;

use std::path::Path;

use tracing::{debug, info};

pub use manifest::{render_project, render_sitemap};
pub use page::{CHROME_IDS, PageChrome, decorate_links};
pub use sidebar::{nav_id, render_sidebar};

use crate::config::DocsConfig;
use crate::contents::ContentsTree;
use crate::convert::ConvertedDocument;
use crate::files;
use crate::Result;

/// Writes the output trees for one build.
pub struct OutputAssembler<'a> {
    config: &'a DocsConfig,
    chrome: PageChrome,
}

impl<'a> OutputAssembler<'a> {
    /// Create an assembler using `chrome` around every page.
    pub const fn new(config: &'a DocsConfig, chrome: PageChrome) -> Self {
        Self { config, chrome }
    }

    /// Write the compiled-help tree into `dir` (cleared first).
    ///
    /// Returns the page names written, in the order listed in the project
    /// file.
    pub fn write_compiled_help(
        &self,
        dir: &Path,
        source_dir: &Path,
        documents: &[ConvertedDocument],
        tree: &ContentsTree,
    ) -> Result<Vec<String>> {
        files::reset_dir(dir)?;

        let mut pages = Vec::with_capacity(documents.len());
        for doc in documents {
            let html = self.chrome.render(doc, None);
            files::write_text(&dir.join(&doc.page), &html)?;
            pages.push(doc.page.clone());
        }

        let images_dir = source_dir.join(&self.config.assets.images_dir);
        let images = files::visible_entries(&images_dir)?;
        let project = &self.config.project;
        files::write_text(
            &dir.join(&project.project_file),
            &render_project(project, &pages, &images),
        )?;
        files::write_text(&dir.join(&project.contents_file), &render_sitemap(tree))?;

        self.copy_assets(source_dir, dir)?;
        info!("wrote compiled-help tree to {}", dir.display());
        Ok(pages)
    }

    /// Write the website tree into `dir` (cleared first).
    pub fn write_website(
        &self,
        dir: &Path,
        source_dir: &Path,
        documents: &[ConvertedDocument],
        tree: &ContentsTree,
    ) -> Result<()> {
        files::reset_dir(dir)?;

        for doc in documents {
            let nav = render_sidebar(tree, &doc.page);
            let html = self.chrome.render(doc, Some(&nav));
            files::write_text(&dir.join(&doc.page), &html)?;
        }

        self.copy_assets(source_dir, dir)?;
        info!("wrote website tree to {}", dir.display());
        Ok(())
    }

    fn copy_assets(&self, source_dir: &Path, dest: &Path) -> Result<()> {
        let assets = &self.config.assets;
        let copied = files::copy_tree(
            &source_dir.join(&assets.images_dir),
            &dest.join(&assets.images_dir),
        )?;
        debug!("copied {copied} image(s) into {}", dest.display());
        for file in [&assets.stylesheet, &assets.script] {
            files::copy_file(&source_dir.join(file), &dest.join(file))?;
        }
        Ok(())
    }
}
