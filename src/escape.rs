//! HTML text encoding.
//!
//! Only printable ASCII outside a small forbidden set passes through
//! unchanged. Everything else becomes a character reference, and non-ASCII
//! code points are written as `&#x{HEX};` of the full code point.

use std::borrow::Cow;
use std::fmt::Write as _;

/// Escape text for use in HTML content or a quoted attribute value.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    match s.find(needs_escape) {
        None => Cow::Borrowed(s),
        Some(_) => {
            let mut result = String::with_capacity(s.len() + s.len() / 2);
            escape_html_into(s, &mut result);
            Cow::Owned(result)
        }
    }
}

/// Escape text, appending the result to `output`.
pub fn escape_html_into(s: &str, output: &mut String) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            c if needs_escape(c) => {
                // Writing to a String cannot fail.
                let _ = write!(output, "&#x{:X};", c as u32);
            }
            c => output.push(c),
        }
    }
}

/// Check if a character must be replaced by a reference.
#[inline]
fn needs_escape(c: char) -> bool {
    !c.is_ascii() || c.is_ascii_control() || matches!(c, '&' | '<' | '>' | '"' | '\'' | '+')
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_html("hello world"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_apostrophe_and_plus() {
        assert_eq!(escape_html("it's 1+1"), "it&#x27;s 1&#x2B;1");
    }

    #[test]
    fn test_astral_code_points() {
        assert_eq!(escape_html("\u{1D54F}\u{1D550}"), "&#x1D54F;&#x1D550;");
    }

    #[test]
    fn test_non_ascii_and_controls() {
        assert_eq!(escape_html("caf\u{e9}"), "caf&#xE9;");
        assert_eq!(escape_html("a\nb\tc"), "a&#xA;b&#x9;c");
    }

    #[test]
    fn test_escape_into_appends() {
        let mut out = String::from("<br/>");
        escape_html_into("<3", &mut out);
        assert_eq!(out, "<br/>&lt;3");
    }
}
