//! Error types for lead-markup.
//!
//! Rendering itself never fails; malformed markup degrades to literal text.
//! Errors only describe why an image reference was rejected.

use thiserror::Error;

/// Reasons a string is not accepted as an image URI reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    /// Nothing between the image markers
    #[error("empty URI reference")]
    Empty,

    /// Character outside the URI character set
    #[error("invalid character {ch:?} at byte {position}")]
    InvalidCharacter {
        /// Offending character
        ch: char,
        /// Byte offset inside the reference
        position: usize,
    },

    /// `%` not followed by two hex digits
    #[error("malformed percent-encoding at byte {position}")]
    InvalidPercentEncoding {
        /// Byte offset of the `%`
        position: usize,
    },

    /// Rejected by the URL parser (empty host, bad port, bad IP literal, ...)
    #[error("malformed URI reference: {0}")]
    Malformed(#[from] url::ParseError),

    /// Well-formed, but the scheme is rejected by the active policy
    #[error("scheme not allowed: {0:?}")]
    DisallowedScheme(String),
}

/// Result type alias for URI checks.
pub type UriResult<T> = Result<T, UriError>;

impl UriError {
    /// Create an invalid-character error.
    pub fn invalid_char(ch: char, position: usize) -> Self {
        Self::InvalidCharacter { ch, position }
    }
}
