//! Text escaping and XML 1.0 lexical checks.

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'` so the text can be embedded in markup.
pub fn escape(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

/// Whether `c` is a legal XML 1.0 `Char`.
///
/// Rust strings never hold surrogates, so only the C0 controls and the two
/// non-characters at the end of the BMP need rejecting.
pub fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn is_name_start_char(c: char) -> bool {
    c == '_' || c == ':' || c.is_alphabetic()
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c) || c == '-' || c == '.' || c.is_numeric()
}

/// Whether `name` can be used as an element name.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}
