//! Build configuration for the documentation pipeline.
//!
//! Every setting has a default matching the XWord help sources, so a source
//! directory without a config file builds exactly as before. Projects can
//! override any subset of the settings with an `xwdoc.toml` file placed in the
//! source directory (or passed explicitly).
//!
//! ## Example Configuration File
//!
//! ```toml
//! [contents]
//! order = ["index", "solving", "license"]
//! no_ids = ["license"]
//!
//! [project]
//! compiled_file = "xword.chm"
//! default_topic = "index.html"
//!
//! [output]
//! chm_dir = "chm"
//! html_dir = "html"
//! ```
//!
//! ```rust
//! use xwdoc_core::DocsConfig;
//!
//! let config = DocsConfig::from_toml_str("[contents]\norder = [\"index\"]\n")?;
//! assert_eq!(config.contents.order, vec!["index".to_string()]);
//! // Untouched sections keep their defaults
//! assert_eq!(config.output.html_dir, "html");
//! # Ok::<(), xwdoc_core::Error>(())
//! ```

use crate::files::{normalize, overlaps};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the source directory when no config path is given.
pub const CONFIG_FILE_NAME: &str = "xwdoc.toml";

/// Top-level configuration consumed by the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Navigation order and heading-id exemptions
    pub contents: ContentsConfig,
    /// Page chrome settings
    pub page: PageConfig,
    /// Static assets copied into both output trees
    pub assets: AssetsConfig,
    /// Output directory names
    pub output: OutputConfig,
    /// Compiled-help project (`.hhp`) options
    pub project: ProjectConfig,
}

/// Controls which documents appear in navigation and in which order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentsConfig {
    /// Document base names (file stem, no extension) in navigation order.
    ///
    /// Documents missing from this list are still converted and written, but
    /// they do not appear in the contents tree and trigger a warning.
    pub order: Vec<String>,

    /// Document base names exempt from heading-id generation.
    ///
    /// Used for license-type pages whose headings are not navigable.
    pub no_ids: Vec<String>,
}

impl Default for ContentsConfig {
    fn default() -> Self {
        let order = [
            "index",
            "window",
            "solving",
            "navigation",
            "check",
            "diagramless",
            "layout",
            "preferences",
            "packages",
            "features",
            "acrosslite",
            "crosswordsolver",
            "license",
        ];
        Self {
            order: order.iter().map(ToString::to_string).collect(),
            no_ids: vec!["license".to_string()],
        }
    }
}

impl ContentsConfig {
    /// Whether `name` is listed in the navigation order.
    pub fn is_listed(&self, name: &str) -> bool {
        self.order.iter().any(|entry| entry == name)
    }

    /// Whether headings of `name` are exempt from id generation.
    pub fn skips_ids(&self, name: &str) -> bool {
        self.no_ids.iter().any(|entry| entry == name)
    }
}

/// Page chrome shared by every generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Markdown for the navigation bar shown above and below each page body.
    pub links: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            links: "[Overview](index.html) |\n\
                    [Sourceforge](https://sourceforge.net/projects/wx-xword/) |\n\
                    [Download](http://sourceforge.net/projects/wx-xword/files/Binary/)"
                .to_string(),
        }
    }
}

/// Static assets, relative to the source directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Image directory, copied recursively (dotfiles skipped).
    pub images_dir: String,
    /// Stylesheet linked from every page.
    pub stylesheet: String,
    /// Navigation script linked from every page.
    pub script: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            images_dir: "images".to_string(),
            stylesheet: "styles.css".to_string(),
            script: "functions.js".to_string(),
        }
    }
}

/// Names of the two output trees, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Compiled-help flavor directory.
    pub chm_dir: String,
    /// Website flavor directory.
    pub html_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chm_dir: "chm".to_string(),
            html_dir: "html".to_string(),
        }
    }
}

/// Options written to the `[OPTIONS]` section of the help project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project file name (written in the compiled-help tree).
    pub project_file: String,
    /// Compiled help file produced by the help compiler.
    pub compiled_file: String,
    /// Sitemap contents file name.
    pub contents_file: String,
    /// Page opened by default.
    pub default_topic: String,
    /// Language identifier line.
    pub language: String,
    /// Compatibility line.
    pub compatibility: String,
    /// Whether the help compiler shows progress.
    pub display_compile_progress: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_file: "help.hhp".to_string(),
            compiled_file: "xword.chm".to_string(),
            contents_file: "contents.hhc".to_string(),
            default_topic: "index.html".to_string(),
            language: "0x409 English (United States)".to_string(),
            compatibility: "1.1 or later".to_string(),
            display_compile_progress: false,
        }
    }
}

impl DocsConfig {
    /// Parse a configuration from TOML text, filling gaps with defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::at_path(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Load `xwdoc.toml` from `source_dir` if present, otherwise the defaults.
    pub fn load_or_default(source_dir: &Path) -> Result<Self> {
        let path = source_dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.output.chm_dir.trim().is_empty() || self.output.html_dir.trim().is_empty() {
            return Err(Error::Config(
                "output directory names must not be empty".into(),
            ));
        }
        let chm = normalize(Path::new(&self.output.chm_dir));
        let html = normalize(Path::new(&self.output.html_dir));
        if overlaps(&chm, &html) {
            return Err(Error::Config(format!(
                "chm_dir '{}' and html_dir '{}' must not overlap",
                self.output.chm_dir, self.output.html_dir
            )));
        }
        if let Some(dup) = first_duplicate(&self.contents.order) {
            return Err(Error::Config(format!(
                "'{dup}' appears more than once in contents.order"
            )));
        }
        Ok(())
    }
}

fn first_duplicate(items: &[String]) -> Option<&str> {
    items
        .iter()
        .enumerate()
        .find(|(idx, item)| items[..*idx].contains(item))
        .map(|(_, item)| item.as_str())
}
