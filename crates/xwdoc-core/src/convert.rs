//! Markdown to HTML conversion with heading anchors.
//!
//! The converter turns one source document into a [`ConvertedDocument`]: the
//! page title (the plain text of the first line), the rendered HTML body, and the
//! ordered list of [`Heading`]s that received anchor ids. It performs no I/O.
//!
//! Rendering uses `comrak` with the table and footnote extensions enabled and
//! raw HTML passed through, which matches what the help sources were written
//! against.
//!
//! ## Heading anchors
//!
//! Every `<hN>` in the rendered body gets an `id` attribute derived from its
//! text (see [`crate::heading::anchor_id`]), except:
//!
//! - in documents listed in `contents.no_ids` (license-type pages), and
//! - on the heading whose text equals the document title.
//!
//! Ids used by the website chrome ([`crate::generate::CHROME_IDS`]) are never
//! handed to headings.
//!
//! ```rust
//! use xwdoc_core::{ContentsConfig, MarkdownConverter};
//!
//! let contents = ContentsConfig::default();
//! let converter = MarkdownConverter::new(&contents);
//! let doc = converter.convert("solving", "# Solving\n\n## Entering letters\n");
//!
//! assert_eq!(doc.title, "Solving");
//! assert_eq!(doc.page, "solving.html");
//! assert!(doc.body.contains(r#"<h2 id="entering_letters">Entering letters</h2>"#));
//! assert!(doc.body.contains("<h1>Solving</h1>"));
//! ```

use std::sync::LazyLock;

use comrak::{Options, markdown_to_html};
use regex::{Captures, Regex};
use serde::Serialize;

use crate::config::ContentsConfig;
use crate::generate::CHROME_IDS;
use crate::heading::{AnchorAllocator, Heading, heading_text};

/// Matches a rendered heading without attributes. `regex` has no
/// backreferences, so the closing level is captured and compared by hand.
#[allow(clippy::unwrap_used)]
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h([1-6])>(.*?)</h([1-6])>").unwrap());

/// Extension used for generated pages.
pub const PAGE_EXTENSION: &str = "html";

/// A source document after conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedDocument {
    /// Base name of the source file (stem, no extension).
    pub name: String,
    /// Output page file name (`<name>.html`).
    pub page: String,
    /// Page title: the first source line rendered and reduced to plain text.
    pub title: String,
    /// Rendered HTML body with heading anchors applied.
    #[serde(skip)]
    pub body: String,
    /// Headings that received anchors, in document order.
    pub headings: Vec<Heading>,
}

/// Converts Markdown documents according to the contents configuration.
pub struct MarkdownConverter<'a> {
    contents: &'a ContentsConfig,
    options: Options<'static>,
}

impl<'a> MarkdownConverter<'a> {
    /// Create a converter that consults `contents` for id exemptions.
    pub fn new(contents: &'a ContentsConfig) -> Self {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.footnotes = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.render.unsafe_ = true;
        Self { contents, options }
    }

    /// Render a Markdown fragment without any heading processing.
    pub fn render(&self, markdown: &str) -> String {
        markdown_to_html(markdown, &self.options)
    }

    /// Convert one document.
    pub fn convert(&self, name: &str, source: &str) -> ConvertedDocument {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let title = self.plain_title(source);
        let rendered = self.render(source);

        let (body, headings) = if self.contents.skips_ids(name) {
            (rendered, Vec::new())
        } else {
            annotate_headings(&rendered, &title)
        };

        ConvertedDocument {
            name: name.to_string(),
            page: format!("{name}.{PAGE_EXTENSION}"),
            title,
            body,
            headings,
        }
    }

    /// Plain text of the title line, compared against rendered heading text.
    ///
    /// The line is rendered as a heading so inline markup, entities and links
    /// reduce exactly the way they do for the title heading in the body.
    fn plain_title(&self, source: &str) -> String {
        let line = title_line(source);
        if line.is_empty() {
            return String::new();
        }
        heading_text(&self.render(&format!("# {line}")))
    }
}

/// Add anchor ids to every heading in `html` except the title heading.
///
/// Returns the annotated HTML and the headings in document order.
pub fn annotate_headings(html: &str, title: &str) -> (String, Vec<Heading>) {
    let mut allocator = AnchorAllocator::with_reserved(CHROME_IDS);
    let mut headings = Vec::new();

    let annotated = HEADING_RE.replace_all(html, |caps: &Captures<'_>| {
        let (open, inner, close) = (&caps[1], &caps[2], &caps[3]);
        if open != close {
            return caps[0].to_string();
        }

        let text = heading_text(inner);
        if text == title {
            return caps[0].to_string();
        }

        let id = allocator.allocate(&text);
        let level = open.as_bytes()[0] - b'0';
        let tag = format!(r#"<h{open} id="{id}">{inner}</h{close}>"#);
        headings.push(Heading { level, text, id });
        tag
    });

    (annotated.into_owned(), headings)
}

/// The first line of a source document with ATX heading markers removed.
///
/// `# Solving` and a setext `Solving` title line both yield `Solving`. Inline
/// markup is kept as written.
pub fn title_line(source: &str) -> &str {
    let first = source.lines().next().unwrap_or_default().trim();
    strip_atx_markers(first)
}

fn strip_atx_markers(line: &str) -> &str {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return line;
    }
    let rest = &line[hashes..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return line;
    }

    let rest = rest.trim();
    let without_closing = rest.trim_end_matches('#');
    if without_closing.is_empty() {
        ""
    } else if without_closing.ends_with([' ', '\t']) {
        without_closing.trim_end()
    } else {
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents() -> ContentsConfig {
        ContentsConfig {
            order: vec!["index".into(), "license".into()],
            no_ids: vec!["license".into()],
        }
    }

    #[test]
    fn test_title_from_first_line() {
        assert_eq!(title_line("# Solving\nbody"), "Solving");
        assert_eq!(title_line("Solving\n=======\n"), "Solving");
        assert_eq!(title_line("## Closed ##\n"), "Closed");
        assert_eq!(title_line("# C#\n"), "C#");
        assert_eq!(title_line("#hashtag\n"), "#hashtag");
        assert_eq!(title_line(""), "");
    }

    #[test]
    fn test_title_with_inline_markup() {
        // Given: a title line with emphasis, code, a link and an entity
        let contents = contents();
        let converter = MarkdownConverter::new(&contents);
        let source = "# Using *Across Lite* `.puz` files &amp; [XWord](index.html)\n\n## Opening\n";

        // When: converting it
        let doc = converter.convert("acrosslite", source);

        // Then: the title is plain text and its heading stays without an id
        assert_eq!(doc.title, "Using Across Lite .puz files & XWord");
        let ids: Vec<&str> = doc.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["opening"]);
        assert!(doc.body.contains("<h1>Using <em>Across Lite</em>"));
    }

    #[test]
    fn test_setext_title_with_markup() {
        let contents = contents();
        let converter = MarkdownConverter::new(&contents);

        let doc = converter.convert("index", "The **XWord** help\n==================\n\n## Start\n");

        assert_eq!(doc.title, "The XWord help");
        assert_eq!(doc.headings.len(), 1);
        assert!(doc.body.contains("<h1>The <strong>XWord</strong> help</h1>"));
    }

    #[test]
    fn test_headings_avoid_chrome_ids() {
        let contents = contents();
        let converter = MarkdownConverter::new(&contents);

        let doc = converter.convert("index", "# Overview\n\n## Content\n\n## Nav\n");

        let ids: Vec<&str> = doc.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["content_2", "nav_2"]);
        assert!(!doc.body.contains(r#"id="content""#));
    }

    #[test]
    fn test_headings_get_ids() {
        // Given: a document with a title heading and two sections
        let contents = contents();
        let converter = MarkdownConverter::new(&contents);
        let source = "# Overview\n\nIntro.\n\n## Getting Started\n\n### The Grid\n";

        // When: converting it
        let doc = converter.convert("index", source);

        // Then: the title heading is untouched and sections carry ids
        assert!(doc.body.contains("<h1>Overview</h1>"));
        assert!(doc.body.contains(r#"<h2 id="getting_started">Getting Started</h2>"#));
        assert!(doc.body.contains(r#"<h3 id="the_grid">The Grid</h3>"#));
        assert_eq!(
            doc.headings,
            vec![
                Heading {
                    level: 2,
                    text: "Getting Started".into(),
                    id: "getting_started".into()
                },
                Heading {
                    level: 3,
                    text: "The Grid".into(),
                    id: "the_grid".into()
                },
            ]
        );
    }

    #[test]
    fn test_no_id_documents_are_left_alone() {
        let contents = contents();
        let converter = MarkdownConverter::new(&contents);

        let doc = converter.convert("license", "License\n=======\n\n## Terms\n\n## Warranty\n");

        assert!(doc.headings.is_empty());
        assert!(!doc.body.contains("id="));
        assert!(doc.body.contains("<h2>Terms</h2>"));
    }

    #[test]
    fn test_duplicate_headings_are_suffixed() {
        let contents = contents();
        let converter = MarkdownConverter::new(&contents);

        let doc = converter.convert(
            "index",
            "# Menus\n\n## File\n\n### Options\n\n## Edit\n\n### Options\n",
        );

        let ids: Vec<&str> = doc.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["file", "options", "edit", "options_2"]);
        assert_eq!(doc.body.matches(r#"id="options""#).count(), 1);
        assert_eq!(doc.body.matches(r#"id="options_2""#).count(), 1);
    }

    #[test]
    fn test_inline_markup_in_headings() {
        let contents = contents();
        let converter = MarkdownConverter::new(&contents);

        let doc = converter.convert("index", "# Title\n\n## Using *the* `grid` & clues\n");

        let heading = &doc.headings[0];
        assert_eq!(heading.text, "Using the grid & clues");
        assert_eq!(heading.id, "using_the_grid__clues");
        assert!(doc.body.contains(r#"<h2 id="using_the_grid__clues">"#));
    }

    #[test]
    fn test_tables_and_footnotes_render() {
        let contents = contents();
        let converter = MarkdownConverter::new(&contents);

        let doc = converter.convert(
            "index",
            "# Keys\n\n| Key | Action |\n|-----|--------|\n| Tab | Next |\n\nSee note.[^1]\n\n[^1]: A footnote.\n",
        );

        assert!(doc.body.contains("<table>"));
        assert!(doc.body.contains("<td>Tab</td>"));
        assert!(doc.body.contains("footnote"));
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let contents = contents();
        let converter = MarkdownConverter::new(&contents);
        let source = "# Index\n\n## A\n\n## A\n\n### B-c d\n";

        let first = converter.convert("index", source);
        let second = converter.convert("index", source);

        assert_eq!(first, second);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let contents = contents();
        let converter = MarkdownConverter::new(&contents);

        let doc = converter.convert("index", "\u{feff}# Index\n");

        assert_eq!(doc.title, "Index");
        assert!(doc.headings.is_empty());
    }
}
