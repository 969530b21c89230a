//! Collapsible navigation sidebar for the website flavor.

use std::fmt::Write as _;

use crate::contents::{ContentsTree, NodeId};

/// Render the contents tree as the sidebar for `current_page`.
///
/// Every list below the top level is hidden, except the entries under the
/// current page's own top-level item, which start expanded. Each link syncs
/// the URL fragment through `updateHash()` when clicked.
pub fn render_sidebar(tree: &ContentsTree, current_page: &str) -> String {
    let mut out = String::new();
    write_list(&mut out, tree, tree.roots(), false, current_page);
    out
}

/// Element id used for a sidebar entry: `nav_` plus the link with `.` and `#`
/// replaced by `_`.
pub fn nav_id(link: &str) -> String {
    format!("nav_{}", link.replace(['.', '#'], "_"))
}

fn write_list(out: &mut String, tree: &ContentsTree, items: &[NodeId], hidden: bool, current: &str) {
    if hidden {
        out.push_str("<ul style=\"display:none;\">\n");
    } else {
        out.push_str("<ul>\n");
    }
    for item in items {
        write_item(out, tree, *item, current);
    }
    out.push_str("</ul>\n");
}

fn write_item(out: &mut String, tree: &ContentsTree, id: NodeId, current: &str) {
    let node = tree.node(id);
    let children = tree.children(id);
    let expanded = node.parent.is_none() && node.link == current;

    let _ = writeln!(out, "<li id=\"{}\">", nav_id(&node.link));
    if children.is_empty() {
        out.push_str("<div></div>\n");
    } else if expanded {
        out.push_str(
            "<div class=\"expanded\" onclick=\"toggleMenu(this.parentNode);\"><span style=\"visibility:hidden;\">-</span></div>\n",
        );
    } else {
        out.push_str(
            "<div class=\"collapsed\" onclick=\"toggleMenu(this.parentNode);\"><span style=\"visibility:hidden;\">+</span></div>\n",
        );
    }
    let _ = writeln!(
        out,
        "<a href=\"{link}\" onclick=\"location='{link}'; updateHash();\">{name}</a>",
        link = node.link,
        name = node.name,
    );
    if !children.is_empty() {
        write_list(out, tree, children, !expanded, current);
    }
    out.push_str("</li>\n");
}
