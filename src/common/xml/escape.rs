use std::borrow::Cow;

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Whether `c` may appear in an XML 1.0 document.
#[inline]
fn is_xml_char(c: char) -> bool {
    !matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

/// Escape XML special characters for element text and attribute values.
///
/// Control characters XML 1.0 cannot represent (everything below U+0020 except
/// tab, line feed and carriage return) are dropped.
///
/// # Examples
///
/// ```
/// use songdeck::common::xml::escape_xml;
/// assert_eq!(escape_xml("Rock & Roll"), "Rock &amp; Roll");
/// assert_eq!(escape_xml("<\"O'er\">"), "&lt;&quot;O&apos;er&quot;&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    let text: Cow<'_, str> = if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(|&c| is_xml_char(c)).collect())
    };
    XML_ESCAPER.replace_all(&text, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}
