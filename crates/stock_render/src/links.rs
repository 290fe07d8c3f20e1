use std::sync::OnceLock;

use regex::Regex;

/// A `[label](url)` occurrence found in a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    pub label: String,
    pub url: String,
}

// The URL stops at the first `)` or whitespace; parentheses inside URLs are
// not supported.
fn hyperlink_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[([^\]]+)\]\((https?://[^\s)]+)\)").expect("valid regex literal")
    })
}

/// Collects every inline `[label](http(s)://...)` construct in document order.
///
/// Repeated links are reported once per occurrence. Anything that does not
/// match (missing scheme, empty label, whitespace in the URL, unbalanced
/// brackets) is skipped silently.
pub fn extract_hyperlinks(content: &str) -> Vec<Hyperlink> {
    hyperlink_regex()
        .captures_iter(content)
        .map(|caps| Hyperlink {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        })
        .collect()
}
