//! Offline link checking for a generated HTML tree.
//!
//! Every `<a href="...">` target in every `*.html` page is compared against
//! the set of known targets:
//!
//! - each page name (`solving.html`);
//! - each `id="..."` in a page, as `<page>#<id>`;
//! - any other file present in the directory (images, downloads).
//!
//! External targets are ignored, and fragment-only targets are qualified with
//! the page they appear on. The check reads files only and never follows
//! links over the network.
//!
//! ```rust,no_run
//! use xwdoc_core::LinkChecker;
//!
//! let report = LinkChecker::check_dir("doc/html".as_ref())?;
//! if !report.is_clean() {
//!     print!("{}", report.render_text());
//! }
//! # Ok::<(), xwdoc_core::Error>(())
//! ```

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::convert::PAGE_EXTENSION;
use crate::files;
use crate::links::{is_external, qualify};
use crate::{Error, Result};

#[allow(clippy::unwrap_used)]
static HREF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"<a href="(.*?)""#).unwrap());

#[allow(clippy::unwrap_used)]
static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"id="(.*?)""#).unwrap());

/// A link target with no matching page, anchor or file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenLink {
    /// The unresolved target, qualified with its page when fragment-only.
    pub target: String,
    /// Pages containing the link, sorted and de-duplicated.
    pub referenced_by: Vec<String>,
}

/// Result of checking one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkReport {
    /// Number of pages read.
    pub pages_scanned: usize,
    /// Number of distinct internal targets checked.
    pub links_checked: usize,
    /// Broken targets, sorted.
    pub broken: Vec<BrokenLink>,
}

impl LinkReport {
    /// True when no broken links were found.
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }

    /// Plain-text listing: `No broken links`, or `Broken links:` followed by
    /// one `target [page, ...]` line per broken target.
    pub fn render_text(&self) -> String {
        if self.is_clean() {
            return "No broken links\n".to_string();
        }
        let mut out = String::from("Broken links:\n");
        for link in &self.broken {
            let _ = writeln!(out, "{} [{}]", link.target, link.referenced_by.join(", "));
        }
        out
    }
}

/// Checks the internal links of a generated HTML tree.
pub struct LinkChecker;

impl LinkChecker {
    /// Check every page in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when `dir` does not exist, or an I/O error
    /// when a page cannot be read.
    pub fn check_dir(dir: &Path) -> Result<LinkReport> {
        if !dir.is_dir() {
            return Err(Error::NotFound(format!("directory '{}'", dir.display())));
        }

        let mut pages = Vec::new();
        for (stem, path) in files::files_with_extension(dir, PAGE_EXTENSION)? {
            let html = files::read_text(&path)?;
            pages.push((format!("{stem}.{PAGE_EXTENSION}"), html));
        }

        let mut report = Self::check_pages(&pages);
        // Non-page files (images, downloads) are valid targets too
        if !report.broken.is_empty() {
            report.broken.retain(|link| !dir.join(&link.target).is_file());
        }
        debug!(
            "checked {} link(s) in {} page(s)",
            report.links_checked, report.pages_scanned
        );
        Ok(report)
    }

    /// Check pages given as `(page name, html)` pairs.
    ///
    /// Only the pages themselves and their anchors count as targets.
    pub fn check_pages(pages: &[(String, String)]) -> LinkReport {
        let mut links: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut targets: HashSet<String> = HashSet::new();

        for (page, html) in pages {
            for caps in HREF_RE.captures_iter(html) {
                let href = &caps[1];
                if is_external(href) {
                    continue;
                }
                links
                    .entry(qualify(page, href))
                    .or_default()
                    .insert(page.clone());
            }
            for caps in ID_RE.captures_iter(html) {
                targets.insert(format!("{page}#{}", &caps[1]));
            }
            targets.insert(page.clone());
        }

        let links_checked = links.len();
        let broken = links
            .into_iter()
            .filter(|(target, _)| !targets.contains(target))
            .map(|(target, referenced_by)| BrokenLink {
                target,
                referenced_by: referenced_by.into_iter().collect(),
            })
            .collect();

        LinkReport {
            pages_scanned: pages.len(),
            links_checked,
            broken,
        }
    }
}
