//! Page chrome and link decoration.

use std::sync::LazyLock;

use html_escape::encode_text;
use regex::{Captures, Regex};

use crate::config::AssetsConfig;
use crate::convert::ConvertedDocument;
use crate::links::is_external;

#[allow(clippy::unwrap_used)]
static ANCHOR_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a href="([^"]*)""#).unwrap());

/// Element ids the website chrome puts around every page body.
///
/// Heading anchors must avoid these; see [`crate::heading::AnchorAllocator`].
pub const CHROME_IDS: &[&str] = &["nav", "content"];

/// Fixed chrome wrapped around every page body.
///
/// The same chrome serves both output flavors; the website flavor passes the
/// rendered sidebar to [`PageChrome::render`].
#[derive(Debug, Clone)]
pub struct PageChrome {
    links_html: String,
    stylesheet: String,
    script: String,
}

impl PageChrome {
    /// Build the chrome from the rendered navigation-links bar and asset names.
    pub fn new(links_html: impl Into<String>, assets: &AssetsConfig) -> Self {
        Self {
            links_html: links_html.into(),
            stylesheet: assets.stylesheet.clone(),
            script: assets.script.clone(),
        }
    }

    /// Render a complete page for `doc`.
    ///
    /// With `sidebar`, the navigation is placed in `<div id="nav">` and the
    /// page content moves into `<div id="content">`.
    pub fn render(&self, doc: &ConvertedDocument, sidebar: Option<&str>) -> String {
        let opening = sidebar.map_or_else(
            || "<div>".to_string(),
            |nav| format!("<div id=\"nav\">{nav}</div>\n<div id=\"content\">"),
        );

        let page = format!(
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN"
   "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8" />
<link rel="stylesheet" type="text/css" href="{stylesheet}" />
<title>{title}</title>
<script type="text/javascript" src="{script}"></script>
</head>
<body>
{opening}

{links}<hr />
{body}
<hr />{links}

</div>
<script type="text/javascript">
//<![CDATA[

updateHash();

//]]>
</script>
</body>
</html>
"#,
            stylesheet = self.stylesheet,
            title = encode_text(&doc.title),
            script = self.script,
            links = self.links_html,
            body = doc.body,
        );

        decorate_links(&page)
    }
}

/// Mark external links and make fragment links update the URL hash.
///
/// External targets get `class="external"`; `#fragment` targets get an
/// `onclick` that sets `location` and calls `updateHash()` from the
/// navigation script.
pub fn decorate_links(html: &str) -> String {
    ANCHOR_HREF_RE
        .replace_all(html, |caps: &Captures<'_>| {
            let href = &caps[1];
            if is_external(href) {
                format!(r#"<a href="{href}" class="external""#)
            } else if href.starts_with('#') {
                format!(r#"<a href="{href}" onclick="location='{href}'; updateHash();""#)
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> ConvertedDocument {
        ConvertedDocument {
            name: "index".into(),
            page: "index.html".into(),
            title: "Tips & Tricks".into(),
            body: body.into(),
            headings: Vec::new(),
        }
    }

    #[test]
    fn test_external_links_get_class() {
        let html = r#"<a href="https://example.com">x</a> <a href="page.html">y</a>"#;

        let out = decorate_links(html);

        assert!(out.contains(r#"<a href="https://example.com" class="external">x</a>"#));
        assert!(out.contains(r#"<a href="page.html">y</a>"#));
    }

    #[test]
    fn test_fragment_links_update_hash() {
        let out = decorate_links(r##"<a href="#grid">grid</a>"##);
        assert_eq!(
            out,
            r##"<a href="#grid" onclick="location='#grid'; updateHash();">grid</a>"##
        );
    }

    #[test]
    fn test_render_without_sidebar() {
        // Given: chrome with a links bar
        let chrome = PageChrome::new(
            "<p><a href=\"index.html\">Overview</a></p>\n",
            &AssetsConfig::default(),
        );

        // When: rendering a page for the compiled-help flavor
        let page = chrome.render(&doc("<p>Hello</p>\n"), None);

        // Then: the title is escaped and the links bar appears twice
        assert!(page.contains("<title>Tips &amp; Tricks</title>"));
        assert!(page.contains(r#"href="styles.css""#));
        assert!(page.contains(r#"src="functions.js""#));
        assert!(page.contains("<body>\n<div>\n"));
        assert_eq!(page.matches(r#"<a href="index.html">Overview</a>"#).count(), 2);
        assert!(page.contains("<p>Hello</p>"));
        assert!(!page.contains("id=\"nav\""));
    }

    #[test]
    fn test_render_with_sidebar() {
        let chrome = PageChrome::new("", &AssetsConfig::default());

        let page = chrome.render(&doc("<p>Hello</p>\n"), Some("<ul></ul>"));

        assert!(page.contains("<body>\n<div id=\"nav\"><ul></ul></div>\n<div id=\"content\">\n"));
        for id in CHROME_IDS {
            assert_eq!(page.matches(&format!("id=\"{id}\"")).count(), 1);
        }
    }
}
