use std::sync::LazyLock;

use regex_lite::Regex;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RE should compile"));

/// True if `text` contains anything from the CJK Unified Ideographs range
/// U+4E00..=U+9FA5. A coarse signal that a passage is not English.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4E00}'..='\u{9FA5}').contains(&c))
}

/// Join node texts into one content buffer.
///
/// Each node is trimmed, dropped if empty or if it contains CJK, has its
/// whitespace runs collapsed to a single space, and is followed by one space.
pub fn normalize_nodes<I, T>(nodes: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut content = String::new();

    for node in nodes {
        let text = node.as_ref().trim();
        if text.is_empty() || contains_cjk(text) {
            continue;
        }

        content.push_str(&WHITESPACE_RE.replace_all(text, " "));
        content.push(' ');
    }

    content
}
