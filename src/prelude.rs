//! Prelude for common imports.
//!
//! ```
//! use lead_markup::prelude::*;
//! ```

// Rendering
pub use crate::render::{
    render, render_batch, render_fragment, render_with, RenderConfig, DEFAULT_IMAGE_ALT,
};

// Output
pub use crate::fragment::{HtmlFragment, RenderedHtml, Segment, CONTAINER_CLOSE, CONTAINER_OPEN};

// Scanner
pub use crate::cursor::Cursor;

// Escaping
pub use crate::escape::{escape_html, escape_html_into};

// URI checks
pub use crate::uri::{check_well_formed, is_well_formed, UriPolicy};

// Error
pub use crate::error::{UriError, UriResult};
