//! Compiled-help project files.
//!
//! Two text artifacts accompany the compiled-help tree:
//!
//! - the project file (`help.hhp`): an `[OPTIONS]` header, a `[FILES]` list of
//!   every page and image, and an empty `[INFOTYPES]` trailer;
//! - the sitemap contents file (`contents.hhc`): nested `<UL>` lists of
//!   `text/sitemap` objects mirroring the contents tree.
//!
//! ```rust
//! use xwdoc_core::ProjectConfig;
//! use xwdoc_core::generate::render_project;
//!
//! let hhp = render_project(
//!     &ProjectConfig::default(),
//!     &["index.html".to_string()],
//!     &["grid.png".to_string()],
//! );
//! assert!(hhp.starts_with("[OPTIONS]\n"));
//! assert!(hhp.contains("[FILES]\nindex.html\nimages\\grid.png\n"));
//! assert!(hhp.ends_with("[INFOTYPES]\n"));
//! ```

use std::fmt::Write as _;

use crate::config::ProjectConfig;
use crate::contents::{ContentsTree, NodeId};

/// Directory prefix used for images in the project file.
const IMAGE_PREFIX: &str = "images\\";

/// Render the help project file.
///
/// `pages` and `images` are written in the order given; images are listed
/// by file name and prefixed with the images directory.
pub fn render_project(project: &ProjectConfig, pages: &[String], images: &[String]) -> String {
    let mut out = String::new();
    out.push_str("[OPTIONS]\n");
    let _ = writeln!(out, "Compatibility={}", project.compatibility);
    let _ = writeln!(out, "Compiled file={}", project.compiled_file);
    let _ = writeln!(out, "Contents file={}", project.contents_file);
    let _ = writeln!(out, "Default topic={}", project.default_topic);
    let _ = writeln!(
        out,
        "Display compile progress={}",
        if project.display_compile_progress {
            "Yes"
        } else {
            "No"
        }
    );
    let _ = writeln!(out, "Language={}", project.language);
    out.push_str("\n\n[FILES]\n");
    for page in pages {
        out.push_str(page);
        out.push('\n');
    }
    for image in images {
        out.push_str(IMAGE_PREFIX);
        out.push_str(image);
        out.push('\n');
    }
    out.push_str("\n\n[INFOTYPES]\n");
    out
}

/// Render the sitemap contents file for the attached roots of `tree`.
pub fn render_sitemap(tree: &ContentsTree) -> String {
    let mut out = String::from(
        "<!DOCTYPE HTML PUBLIC \"-//IETF//DTD HTML//EN\">\n\
         <HTML>\n\
         <HEAD>\n\
         <meta name=\"GENERATOR\" content=\"Microsoft&reg; HTML Help Workshop 4.1\">\n\
         <!-- Sitemap 1.0 -->\n\
         </HEAD><BODY>\n\
         <OBJECT type=\"text/site properties\">\n\
         \t<param name=\"ImageType\" value=\"Folder\">\n\
         </OBJECT>\n",
    );
    write_list(&mut out, tree, tree.roots());
    out.push_str("</BODY></HTML>");
    out
}

fn write_list(out: &mut String, tree: &ContentsTree, items: &[NodeId]) {
    out.push_str("<UL>\n");
    for item in items {
        let node = tree.node(*item);
        out.push_str("<LI>");
        out.push_str("<OBJECT type=\"text/sitemap\">\n");
        let _ = writeln!(out, "    <param name=\"Name\" value=\"{}\">", node.name);
        let _ = writeln!(out, "    <param name=\"Local\" value=\"{}\">", node.link);
        out.push_str("</OBJECT>\n");
        let children = tree.children(*item);
        if !children.is_empty() {
            write_list(out, tree, children);
        }
    }
    out.push_str("</UL>\n");
}
