//! URI reference checks for image sources.
//!
//! An image URL is written into the `src` attribute without escaping, so it
//! must first pass two checks:
//!
//! 1. every character is in the URI character set (unreserved, reserved, or
//!    `%HH`). This excludes `"`, `<`, `>`, spaces and anything non-ASCII, so
//!    an accepted reference cannot break out of the attribute. `url` would
//!    percent-encode those instead of rejecting them.
//! 2. the reference parses with `url`, as an absolute URL or relative to a
//!    placeholder base. This rejects malformed authorities (empty host, bad
//!    port, bad IP literal).
//!
//! The default [`UriPolicy::WellFormed`] places no restriction on the scheme:
//! `javascript:alert(1)` is well-formed and is accepted.
//! [`UriPolicy::SafeSchemes`] narrows absolute references to web image
//! sources.

use url::{ParseError, Url};

use crate::error::{UriError, UriResult};

/// Base that relative references are resolved against while checking.
const RELATIVE_BASE: &str = "http://localhost/";

// =============================================================================
// UriPolicy
// =============================================================================

/// Which URI references may become an `<img src>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UriPolicy {
    /// Any well-formed relative or absolute reference.
    #[default]
    WellFormed,
    /// Well-formed, and absolute references must use `http`, `https` or
    /// `data:image/...`.
    SafeSchemes,
}

impl UriPolicy {
    /// Check `uri` against this policy.
    pub fn check(self, uri: &str) -> UriResult<()> {
        let absolute = check_well_formed(uri)?;
        match (self, absolute) {
            (UriPolicy::WellFormed, _) | (UriPolicy::SafeSchemes, None) => Ok(()),
            (UriPolicy::SafeSchemes, Some(url)) if is_safe_scheme(&url) => Ok(()),
            (UriPolicy::SafeSchemes, Some(url)) => {
                Err(UriError::DisallowedScheme(url.scheme().to_string()))
            }
        }
    }
}

fn is_safe_scheme(url: &Url) -> bool {
    match url.scheme() {
        "http" | "https" => true,
        "data" => url
            .path()
            .get(..6)
            .is_some_and(|p| p.eq_ignore_ascii_case("image/")),
        _ => false,
    }
}

// =============================================================================
// Well-formedness
// =============================================================================

/// Check that `uri` is a well-formed relative or absolute URI reference.
pub fn is_well_formed(uri: &str) -> bool {
    check_well_formed(uri).is_ok()
}

/// Validate `uri` as a URI reference.
///
/// Returns the parsed URL for absolute references and `None` for relative ones.
pub fn check_well_formed(uri: &str) -> UriResult<Option<Url>> {
    if uri.is_empty() {
        return Err(UriError::Empty);
    }
    check_charset(uri)?;

    match Url::parse(uri) {
        Ok(url) => Ok(Some(url)),
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE)?.join(uri)?;
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Every character must be unreserved, reserved, or part of `%HH`.
fn check_charset(uri: &str) -> UriResult<()> {
    let bytes = uri.as_bytes();
    for (position, ch) in uri.char_indices() {
        if ch == '%' {
            let hex = bytes.get(position + 1..position + 3);
            if !hex.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)) {
                return Err(UriError::InvalidPercentEncoding { position });
            }
        } else if !is_uri_char(ch) {
            return Err(UriError::invalid_char(ch, position));
        }
    }
    Ok(())
}

#[inline]
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            // unreserved
            '-' | '.' | '_' | '~'
            // gen-delims
            | ':' | '/' | '?' | '#' | '[' | ']' | '@'
            // sub-delims
            | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
        )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_and_relative() {
        assert!(is_well_formed("https://example.com/image.png"));
        assert!(is_well_formed("http://user@example.com:8080/a/b?x=1&y=2#top"));
        assert!(is_well_formed("/images/cat.png"));
        assert!(is_well_formed("cat.png"));
        assert!(is_well_formed("../up/one%20two.png"));
        assert!(is_well_formed("//cdn.example.com/x.gif"));
        assert!(is_well_formed("http://[::1]:80/x.png"));
    }

    #[test]
    fn test_absolute_returns_url() {
        let url = check_well_formed("HTTPS://example.com/a.png").unwrap().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(check_well_formed("a/b:c"), Ok(None));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(check_well_formed(""), Err(UriError::Empty));
    }

    #[test]
    fn test_rejects_quote() {
        assert_eq!(
            check_well_formed("https://example.com/image.png\""),
            Err(UriError::invalid_char('"', 29))
        );
    }

    #[test]
    fn test_rejects_space_and_angle_brackets() {
        assert!(!is_well_formed("a b.png"));
        assert!(!is_well_formed("<script>"));
        assert!(!is_well_formed("caf\u{e9}.png"));
    }

    #[test]
    fn test_rejects_bad_percent() {
        assert_eq!(
            check_well_formed("a%2"),
            Err(UriError::InvalidPercentEncoding { position: 1 })
        );
        assert!(!is_well_formed("a%zz"));
    }

    #[test]
    fn test_rejects_empty_host() {
        assert_eq!(
            check_well_formed("http://"),
            Err(UriError::Malformed(ParseError::EmptyHost))
        );
        assert!(!is_well_formed("//"));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert_eq!(
            check_well_formed("http://a:1:2/x.png"),
            Err(UriError::Malformed(ParseError::InvalidPort))
        );
        assert_eq!(
            check_well_formed("http://example.com:80a/"),
            Err(UriError::Malformed(ParseError::InvalidPort))
        );
    }

    #[test]
    fn test_rejects_bad_ip_literal() {
        assert!(!is_well_formed("http://[zzz]/x.png"));
        assert!(!is_well_formed("http://[]/"));
        assert!(!is_well_formed("http://ex[ample.com/"));
    }

    #[test]
    fn test_well_formed_policy_accepts_any_scheme() {
        assert_eq!(UriPolicy::WellFormed.check("javascript:alert(1)"), Ok(()));
    }

    #[test]
    fn test_safe_schemes_policy() {
        let policy = UriPolicy::SafeSchemes;
        assert_eq!(policy.check("https://example.com/a.png"), Ok(()));
        assert_eq!(policy.check("HTTP://example.com/a.png"), Ok(()));
        assert_eq!(policy.check("data:image/png;base64,AAAA"), Ok(()));
        assert_eq!(policy.check("/relative.png"), Ok(()));
        assert_eq!(
            policy.check("javascript:alert(1)"),
            Err(UriError::DisallowedScheme("javascript".to_string()))
        );
        assert_eq!(
            policy.check("data:text/html,hi"),
            Err(UriError::DisallowedScheme("data".to_string()))
        );
    }
}
