//! Heading text extraction and anchor-id generation.

use std::collections::HashMap;
use std::sync::LazyLock;

use html_escape::{decode_html_entities, encode_quoted_attribute};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[allow(clippy::unwrap_used)]
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

#[allow(clippy::unwrap_used)]
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\-]+").unwrap());

#[allow(clippy::unwrap_used)]
static NON_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z_]+").unwrap());

/// Anchor used when a heading contains no letters at all.
pub const FALLBACK_ANCHOR: &str = "section";

/// A heading extracted from a converted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Plain heading text (tags stripped, entities decoded).
    pub text: String,
    /// Anchor identifier, unique within the document.
    pub id: String,
}

/// Reduce a fragment of heading HTML to its plain text.
///
/// Tags are removed and HTML entities decoded, so `Using <em>the</em> &amp; grid`
/// becomes `Using the & grid`.
pub fn heading_text(inner_html: &str) -> String {
    let stripped = TAG_RE.replace_all(inner_html, "");
    decode_html_entities(&stripped).trim().to_string()
}

/// Derive the base anchor identifier for a heading.
///
/// Runs of whitespace and hyphens become a single underscore, every other
/// character that is not an ASCII letter or underscore is dropped, and the
/// result is lower-cased. The result may be empty.
pub fn anchor_id(text: &str) -> String {
    let joined = SEPARATOR_RE.replace_all(text, "_");
    NON_ID_RE.replace_all(&joined, "").to_lowercase()
}

/// Escape text for use as a contents entry name or attribute value.
pub fn escape_name(text: &str) -> String {
    encode_quoted_attribute(text).into_owned()
}

/// Hands out unique anchor ids within one document.
///
/// The first heading that produces a given base id keeps it; later ones get a
/// numeric suffix (`_2`, `_3`, ...). Base ids never contain digits, so a
/// suffixed id cannot clash with a heading that naturally produces it.
///
/// Ids already used by the surrounding page can be reserved up front; a
/// heading producing one of them is numbered as if it were a repeat.
#[derive(Debug, Default)]
pub struct AnchorAllocator {
    seen: HashMap<String, usize>,
}

impl AnchorAllocator {
    /// Create an allocator with no ids handed out yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator that treats `ids` as already taken.
    pub fn with_reserved(ids: &[&str]) -> Self {
        Self {
            seen: ids.iter().map(|id| ((*id).to_string(), 1)).collect(),
        }
    }

    /// Allocate the anchor for a heading with the given plain text.
    pub fn allocate(&mut self, text: &str) -> String {
        let mut base = anchor_id(text);
        if base.is_empty() {
            base = FALLBACK_ANCHOR.to_string();
        }

        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{base}_{count}")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn anchor_collapses_separators() {
        assert_eq!(anchor_id("Solving a Puzzle"), "solving_a_puzzle");
        assert_eq!(anchor_id("Check - Reveal"), "check_reveal");
        assert_eq!(anchor_id("Multi\t  space"), "multi_space");
    }

    #[test]
    fn anchor_drops_non_letters() {
        assert_eq!(anchor_id("Across Lite (.puz) files"), "across_lite_puz_files");
        assert_eq!(anchor_id("Version 2.0"), "version_");
        assert_eq!(anchor_id("Café"), "caf");
        assert_eq!(anchor_id("123"), "");
    }

    #[test]
    fn heading_text_strips_tags_and_entities() {
        assert_eq!(
            heading_text("Using <em>the</em> &amp; <code>grid</code>"),
            "Using the & grid"
        );
        assert_eq!(heading_text("  Plain  "), "Plain");
    }

    #[test]
    fn escape_name_escapes_quotes() {
        assert_eq!(
            escape_name(r#"The "Grid" & <Clues>"#),
            "The &quot;Grid&quot; &amp; &lt;Clues&gt;"
        );
    }

    #[test]
    fn allocator_suffixes_collisions() {
        // Given: three headings with the same text
        let mut alloc = AnchorAllocator::new();

        // When: allocating ids in document order
        let ids: Vec<String> = ["Options", "Options", "Other", "Options"]
            .iter()
            .map(|t| alloc.allocate(t))
            .collect();

        // Then: the first keeps the base id, later ones are numbered
        assert_eq!(ids, vec!["options", "options_2", "other", "options_3"]);
    }

    #[test]
    fn allocator_skips_reserved_ids() {
        let mut alloc = AnchorAllocator::with_reserved(&["nav", "content"]);
        assert_eq!(alloc.allocate("Content"), "content_2");
        assert_eq!(alloc.allocate("Nav"), "nav_2");
        assert_eq!(alloc.allocate("Navigation"), "navigation");
        assert_eq!(alloc.allocate("Content"), "content_3");
    }

    #[test]
    fn allocator_falls_back_for_empty_ids() {
        let mut alloc = AnchorAllocator::new();
        assert_eq!(alloc.allocate("1.2.3"), "section");
        assert_eq!(alloc.allocate("!!!"), "section_2");
    }

    proptest! {
        #[test]
        fn anchor_only_contains_lowercase_and_underscores(text in "\\PC{0,40}") {
            let id = anchor_id(&text);
            prop_assert!(id.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }

        #[test]
        fn allocated_ids_are_unique(texts in proptest::collection::vec("[a-zA-Z0-9 -]{0,12}", 0..30)) {
            let mut alloc = AnchorAllocator::new();
            let mut seen = std::collections::HashSet::new();
            for text in &texts {
                let id = alloc.allocate(text);
                prop_assert!(!id.is_empty());
                prop_assert!(seen.insert(id));
            }
        }
    }
}
