//! Output sink for rendered posts.
//!
//! A render pass records an ordered list of [`Segment`]s: pre-built markup
//! that is copied verbatim, and literal text that is escaped on the way out.
//! Serializing a fragment wraps it in the fixed `<div class="lead">` container.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::escape::escape_html_into;

/// Opening tag of the container every rendered post is wrapped in.
pub const CONTAINER_OPEN: &str = r#"<div class="lead">"#;

/// Closing tag of the container.
pub const CONTAINER_CLOSE: &str = "</div>";

// =============================================================================
// Segment
// =============================================================================

/// One output event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Markup built by the renderer, inserted as-is.
    Html(Cow<'a, str>),
    /// Input text, escaped when serialized.
    Text(&'a str),
}

impl Segment<'_> {
    /// Check if this is a raw markup segment.
    #[inline]
    pub fn is_html(&self) -> bool {
        matches!(self, Segment::Html(_))
    }

    /// Check if this is a literal text segment.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text(_))
    }

    /// Append the serialized segment to `output`.
    fn write_to(&self, output: &mut String) {
        match self {
            Segment::Html(html) => output.push_str(html),
            Segment::Text(text) => escape_html_into(text, output),
        }
    }
}

// =============================================================================
// HtmlFragment
// =============================================================================

/// Ordered output events of one render pass, borrowing from the input.
#[derive(Debug, Clone, Default)]
pub struct HtmlFragment<'a> {
    segments: SmallVec<[Segment<'a>; 16]>,
}

impl<'a> HtmlFragment<'a> {
    /// Create an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append pre-built markup.
    pub fn push_html(&mut self, html: impl Into<Cow<'a, str>>) {
        self.segments.push(Segment::Html(html.into()));
    }

    /// Append literal text, escaped on serialization.
    pub fn push_text(&mut self, text: &'a str) {
        self.segments.push(Segment::Text(text));
    }

    /// Recorded segments, in output order.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Serialize the segments without the container.
    pub fn inner_html(&self) -> String {
        let mut output = String::new();
        self.write_inner(&mut output);
        output
    }

    /// Serialize into the final, wrapped HTML.
    pub fn to_html(&self) -> RenderedHtml {
        let mut output = String::with_capacity(CONTAINER_OPEN.len() + CONTAINER_CLOSE.len());
        output.push_str(CONTAINER_OPEN);
        self.write_inner(&mut output);
        output.push_str(CONTAINER_CLOSE);
        RenderedHtml(output)
    }

    fn write_inner(&self, output: &mut String) {
        for segment in &self.segments {
            segment.write_to(output);
        }
    }
}

// =============================================================================
// RenderedHtml
// =============================================================================

/// Finished HTML for one post, ready to be inserted into a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedHtml(String);

impl RenderedHtml {
    /// Borrow the markup.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the markup.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Markup between the container tags.
    pub fn inner(&self) -> &str {
        &self.0[CONTAINER_OPEN.len()..self.0.len() - CONTAINER_CLOSE.len()]
    }
}

impl fmt::Display for RenderedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderedHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RenderedHtml> for String {
    fn from(html: RenderedHtml) -> Self {
        html.0
    }
}

impl PartialEq<str> for RenderedHtml {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RenderedHtml {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fragment() {
        let fragment = HtmlFragment::new();
        assert!(fragment.is_empty());
        assert_eq!(fragment.to_html(), r#"<div class="lead"></div>"#);
        assert_eq!(fragment.to_html().inner(), "");
    }

    #[test]
    fn test_html_passes_through_text_is_escaped() {
        let mut fragment = HtmlFragment::new();
        fragment.push_html("<br/>");
        fragment.push_text("a<b");
        assert_eq!(fragment.len(), 2);
        assert!(fragment.segments()[0].is_html());
        assert!(fragment.segments()[1].is_text());
        assert_eq!(fragment.inner_html(), "<br/>a&lt;b");
    }

    #[test]
    fn test_owned_markup() {
        let mut fragment = HtmlFragment::new();
        fragment.push_html(format!("<img src=\"{}\"/>", "x.png"));
        assert_eq!(fragment.to_html().inner(), "<img src=\"x.png\"/>");
    }

    #[test]
    fn test_rendered_html_conversions() {
        let mut fragment = HtmlFragment::new();
        fragment.push_text("hi");
        let html = fragment.to_html();
        assert_eq!(html.to_string(), r#"<div class="lead">hi</div>"#);
        assert_eq!(html.as_ref(), html.as_str());
        let s: String = html.into();
        assert!(s.ends_with(CONTAINER_CLOSE));
    }
}
