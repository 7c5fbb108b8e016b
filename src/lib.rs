//! lead-markup - Inline post markup to escaped HTML
//!
//! ## Markup
//!
//! - `###text###` renders a marquee heading
//! - `![url]` renders an image when `url` is a well-formed URI reference
//! - line breaks (`\n`, `\r`, `\r\n`) render as `<br/>`
//! - everything else is HTML-escaped text
//!
//! Malformed markup never fails: it is emitted as literal text. Output is
//! always wrapped in `<div class="lead">...</div>`.
//!
//! ## Modules
//! - `cursor`: forward-only scanner over the input
//! - `render`: token loop and `RenderConfig`
//! - `fragment`: output segments and the finished `RenderedHtml`
//! - `escape`: HTML text encoding
//! - `uri`: URI reference checks for image sources
//!
//! ## Usage
//!
//! ```
//! let html = lead_markup::render("###Hello###\nworld");
//! assert_eq!(
//!     html.as_str(),
//!     r#"<div class="lead"><h2 class="display-6"><marquee>Hello</marquee></h2>world</div>"#
//! );
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Scanner over post text
pub mod cursor;

/// HTML text encoding
pub mod escape;

/// Error types
pub mod error;

/// Output segments
pub mod fragment;

/// Prelude for common imports
pub mod prelude;

/// Markup rendering
pub mod render;

/// URI reference checks
pub mod uri;

// =============================================================================
// Re-exports
// =============================================================================

// Rendering
pub use render::{render, render_batch, render_fragment, render_with, RenderConfig};

// Output
pub use fragment::{HtmlFragment, RenderedHtml, Segment};

// Scanner
pub use cursor::Cursor;

// Escaping and URI checks
pub use escape::escape_html;
pub use uri::{is_well_formed, UriPolicy};

// Error types
pub use error::{UriError, UriResult};

// =============================================================================
// Thread-safety
// =============================================================================

#[cfg(test)]
mod static_checks {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(RenderConfig: Send, Sync, Clone);
    assert_impl_all!(RenderedHtml: Send, Sync);
    assert_impl_all!(HtmlFragment<'static>: Send, Sync);
    assert_impl_all!(UriError: Send, Sync, std::error::Error);
}
