//! Markdown rendering for participant details and tournament READMEs.
//!
//! Detail documents use a small line-oriented renderer tuned to the
//! conventions of scoring scripts (key-value lines, numeric emphasis, capped
//! tables). READMEs use comrak with GFM extensions.

mod detail;
mod inline;
mod renderer;

pub use detail::{MAX_TABLE_ROWS, ParsedDetailDocument, TRUNCATION_NOTICE, render_detail};
pub use inline::{escape_html, format_inline};
pub use renderer::ReadmeRenderer;
