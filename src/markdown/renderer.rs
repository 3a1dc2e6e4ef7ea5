//! Tournament README rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;

/// Renders tournament README documents with GFM extensions.
///
/// READMEs are prose written for the repository front page, unlike detail
/// documents, so they get a complete CommonMark implementation. Raw HTML is
/// not passed through: the data repository accepts contributions and its
/// content is not trusted.
pub struct ReadmeRenderer<'a> {
    options: Options<'a>,
}

impl<'a> ReadmeRenderer<'a> {
    /// Creates renderer with tables, strikethrough, autolinks and task lists enabled.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        options.parse.smart = true;

        // Raw HTML is replaced by a placeholder comment
        options.render.unsafe_ = false;

        Self { options }
    }

    /// Renders markdown content to an HTML string.
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }

    /// Renders UTF-8 markdown bytes read from the repository.
    ///
    /// # Errors
    ///
    /// Returns error if content is not valid UTF-8
    pub fn render_bytes(&self, content: Vec<u8>) -> Result<String> {
        let content = String::from_utf8(content).context("README contains invalid UTF8")?;
        Ok(self.render(&content))
    }
}

impl<'a> Default for ReadmeRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
