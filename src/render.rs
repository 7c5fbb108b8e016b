//! Post markup rendering.
//!
//! A single forward pass over the post text. At each position the first
//! matching rule wins:
//!
//! 1. `###text###` becomes a marquee heading
//! 2. `![url]` becomes an image, if `url` passes the [`UriPolicy`]
//! 3. a newline (`\r\n`, `\n` or `\r`) becomes `<br/>`
//! 4. anything else is escaped text, one segment per run
//!
//! Unterminated or rejected constructs are emitted as literal text and
//! scanning resumes right after the opening marker.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::escape::escape_html;
use crate::fragment::{HtmlFragment, RenderedHtml};
use crate::uri::UriPolicy;

/// Marker opening and closing a marquee heading.
pub const HEADER_MARKER: &str = "###";

/// Marker opening an image reference.
pub const IMAGE_OPEN: &str = "![";

/// Marker closing an image reference.
pub const IMAGE_CLOSE: &str = "]";

/// Default `alt` text of rendered images.
pub const DEFAULT_IMAGE_ALT: &str = "Attached image";

const MARQUEE_OPEN: &str = r#"<h2 class="display-6"><marquee>"#;
const MARQUEE_CLOSE: &str = "</marquee></h2>";
const LINE_BREAK: &str = "<br/>";

// =============================================================================
// RenderConfig
// =============================================================================

/// Configuration for post rendering.
///
/// The `<div class="lead">` container is fixed and not part of the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Which image references are turned into `<img>` tags.
    pub uri_policy: UriPolicy,
    /// `alt` attribute of rendered images (escaped on output).
    pub image_alt: Cow<'static, str>,
}

impl RenderConfig {
    /// Accept any well-formed URI reference as an image source.
    pub const LEGACY: Self = Self {
        uri_policy: UriPolicy::WellFormed,
        image_alt: Cow::Borrowed(DEFAULT_IMAGE_ALT),
    };

    /// Only accept relative references and `http`/`https`/`data:image` sources.
    ///
    /// Changes behavior: `![javascript:...]` is left as literal text.
    pub const HARDENED: Self = Self {
        uri_policy: UriPolicy::SafeSchemes,
        image_alt: Cow::Borrowed(DEFAULT_IMAGE_ALT),
    };

    /// Create a config with the given URI policy.
    pub fn new(uri_policy: UriPolicy) -> Self {
        Self {
            uri_policy,
            ..Self::LEGACY
        }
    }

    /// Set the URI policy.
    pub fn with_uri_policy(mut self, uri_policy: UriPolicy) -> Self {
        self.uri_policy = uri_policy;
        self
    }

    /// Set the `alt` text of rendered images.
    pub fn with_image_alt(mut self, alt: impl Into<Cow<'static, str>>) -> Self {
        self.image_alt = alt.into();
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::LEGACY
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render post text to HTML with the default config.
pub fn render(text: &str) -> RenderedHtml {
    render_with(text, &RenderConfig::LEGACY)
}

/// Render post text to HTML.
pub fn render_with(text: &str, config: &RenderConfig) -> RenderedHtml {
    render_fragment(text, config).to_html()
}

/// Render post text to its output segments, before serialization.
pub fn render_fragment<'a>(text: &'a str, config: &RenderConfig) -> HtmlFragment<'a> {
    let mut cursor = Cursor::new(text);
    let mut output = HtmlFragment::new();

    while !cursor.is_done() {
        if cursor.try_consume(HEADER_MARKER) {
            render_header(&mut cursor, &mut output);
        } else if cursor.try_consume(IMAGE_OPEN) {
            render_image(&mut cursor, &mut output, config);
        } else if cursor.try_consume_newline() {
            output.push_html(LINE_BREAK);
        } else {
            // One text segment per run of characters no other rule matches.
            let start = cursor.offset();
            cursor.advance_char();
            while !cursor.is_done() && !at_markup(&cursor) {
                cursor.advance_char();
            }
            output.push_text(&text[start..cursor.offset()]);
        }
    }

    output
}

/// Check whether one of the markup rules would match at the cursor.
fn at_markup(cursor: &Cursor<'_>) -> bool {
    cursor.starts_with(HEADER_MARKER)
        || cursor.starts_with(IMAGE_OPEN)
        || matches!(cursor.current_char(), Some('\n' | '\r'))
}

/// Render many posts with the same config.
///
/// With the `parallel` feature, posts are rendered on the rayon pool.
pub fn render_batch<S>(posts: &[S], config: &RenderConfig) -> Vec<RenderedHtml>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        posts
            .par_iter()
            .map(|post| render_with(post.as_ref(), config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        posts
            .iter()
            .map(|post| render_with(post.as_ref(), config))
            .collect()
    }
}

/// Cursor is just past an opening `###`.
fn render_header<'a>(cursor: &mut Cursor<'a>, output: &mut HtmlFragment<'a>) {
    match cursor.consume_until(HEADER_MARKER) {
        Some(content) if !content.is_empty() => {
            output.push_html(MARQUEE_OPEN);
            output.push_text(content);
            output.push_html(MARQUEE_CLOSE);

            cursor.advance(HEADER_MARKER.len());
            cursor.try_consume_newline();
        }
        // An empty heading (`######`) is treated like a missing closing marker.
        _ => {
            trace!(offset = cursor.offset(), "unterminated header marker");
            output.push_html(HEADER_MARKER);
        }
    }
}

/// Cursor is just past an opening `![`.
fn render_image<'a>(
    cursor: &mut Cursor<'a>,
    output: &mut HtmlFragment<'a>,
    config: &RenderConfig,
) {
    let url = cursor.consume_until(IMAGE_CLOSE).unwrap_or_default();

    if let Err(err) = config.uri_policy.check(url) {
        debug!(offset = cursor.offset(), %err, "image reference left as text");
        output.push_html(IMAGE_OPEN);
        if !url.is_empty() {
            output.push_text(url);
        }
        return;
    }

    // `url` passed the URI character check, so it cannot contain `"`, `<` or `>`.
    output.push_html(format!(
        r#"<img alt="{}" src="{}"/>"#,
        escape_html(&config.image_alt),
        url
    ));

    cursor.advance(IMAGE_CLOSE.len());
    cursor.try_consume_newline();
}

// =============================================================================
// Tests
// =============================================================================
