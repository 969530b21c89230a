//! Link classification shared by the assembler and the link checker.

use url::Url;

/// Whether `href` points outside the generated documentation.
///
/// Anything with a URL scheme (`http:`, `https:`, `mailto:`, ...) or a
/// protocol-relative `//host` prefix counts as external; page names and
/// fragments do not.
///
/// ```rust
/// use xwdoc_core::links::is_external;
///
/// assert!(is_external("https://sourceforge.net/projects/wx-xword/"));
/// assert!(is_external("mailto:someone@example.com"));
/// assert!(!is_external("solving.html#entering_letters"));
/// assert!(!is_external("#top"));
/// ```
pub fn is_external(href: &str) -> bool {
    href.starts_with("//") || Url::parse(href).is_ok()
}

/// Qualify a link target relative to the page it appears on.
///
/// Fragment-only targets (`#id`) become `<page>#id`; everything else is
/// returned unchanged.
pub fn qualify(page: &str, href: &str) -> String {
    if href.starts_with('#') {
        format!("{page}{href}")
    } else {
        href.to_string()
    }
}
