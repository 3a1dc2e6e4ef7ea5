//! Participant detail document rendering.
//!
//! Detail documents are written by hand or by scoring scripts and follow no
//! strict grammar. The renderer makes one forward pass over the lines with a
//! single block state (code, list, table or none) and classifies every other
//! line by the first rule that matches it. Input that fits no rule becomes a
//! paragraph, so rendering never fails.

use regex::Regex;
use std::sync::LazyLock;

use super::inline::{escape_html, format_inline};

/// Data rows shown per table before the truncation notice.
pub const MAX_TABLE_ROWS: usize = 50;

/// Notice row inserted once when a table exceeds [`MAX_TABLE_ROWS`].
pub const TRUNCATION_NOTICE: &str = "Showing top 50 participants only";

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+(.*)$").expect("valid bullet pattern"));

static TABLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|?[\s:|-]*-[\s:|-]*\|?$").expect("valid separator pattern"));

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").expect("valid rule pattern"));

static BOLD_KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*([^*]+?):\*\*\s*(.*)$").expect("valid bold key-value pattern")
});

static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^*:\s][^*:]*?):\s+(.*\S)$").expect("valid key-value pattern")
});

/// Level-1 header the summary UI already shows above every detail page.
static STANDINGS_BANNER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Standings for .+ as of \d{4}-\d{2}-\d{2}[ T_]\d{2}[:-]\d{2}[:-]\d{2} UTC$")
        .expect("valid banner pattern")
});

/// Rendered detail document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDetailDocument {
    html: String,
    raw_text: String,
}

impl ParsedDetailDocument {
    /// Sanitized HTML fragment, safe to insert into a page body.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Markdown the fragment was rendered from.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// Open table being rendered.
#[derive(Debug)]
struct TableState {
    columns: usize,
    data_rows: usize,
    truncated: bool,
}

/// Multi-line construct the current line may belong to.
#[derive(Debug)]
enum Block {
    None,
    Code,
    List(Vec<String>),
    Table(TableState),
}

/// Accumulates output while walking the document.
struct DetailWriter {
    html: String,
    block: Block,
}

impl DetailWriter {
    fn new(capacity: usize) -> Self {
        Self {
            html: String::with_capacity(capacity),
            block: Block::None,
        }
    }

    /// Closes whatever block is open.
    fn close_block(&mut self) {
        match std::mem::replace(&mut self.block, Block::None) {
            Block::None => {}
            Block::Code => self.html.push_str("</code></pre>\n"),
            Block::List(items) => {
                self.html.push_str("<ul class=\"detail-list\">\n");
                for item in items {
                    self.html.push_str("<li>");
                    self.html.push_str(&item);
                    self.html.push_str("</li>\n");
                }
                self.html.push_str("</ul>\n");
            }
            Block::Table(_) => self.html.push_str("</tbody>\n</table>\n</div>\n"),
        }
    }

    fn open_code(&mut self, language: &str) {
        self.close_block();
        if language.is_empty() {
            self.html.push_str("<pre><code>");
        } else {
            self.html.push_str("<pre><code class=\"language-");
            self.html.push_str(&escape_html(language));
            self.html.push_str("\">");
        }
        self.block = Block::Code;
    }

    fn push_code_line(&mut self, line: &str) {
        self.html.push_str(&escape_html(line));
        self.html.push('\n');
    }

    fn push_list_item(&mut self, item: &str) {
        let formatted = format_inline(item);
        match &mut self.block {
            Block::List(items) => items.push(formatted),
            _ => {
                self.close_block();
                self.block = Block::List(vec![formatted]);
            }
        }
    }

    fn open_table(&mut self, header: &str) {
        self.close_block();
        let cells = split_cells(header);
        self.html
            .push_str("<div class=\"table-wrapper\">\n<table class=\"detail-table\">\n<thead>\n<tr>");
        for cell in &cells {
            self.html.push_str("<th>");
            self.html.push_str(&format_inline(cell));
            self.html.push_str("</th>");
        }
        self.html.push_str("</tr>\n</thead>\n<tbody>\n");
        self.block = Block::Table(TableState {
            columns: cells.len().max(1),
            data_rows: 0,
            truncated: false,
        });
    }

    /// Appends a body row, enforcing the row cap. Caller guarantees a table is open.
    fn push_table_row(&mut self, row: &str) {
        let Block::Table(table) = &mut self.block else {
            return;
        };

        if table.data_rows >= MAX_TABLE_ROWS {
            if !table.truncated {
                table.truncated = true;
                self.html.push_str(&format!(
                    "<tr class=\"table-notice\"><td colspan=\"{}\" style=\"text-align: center\">{}</td></tr>\n",
                    table.columns, TRUNCATION_NOTICE
                ));
            }
            return;
        }

        table.data_rows += 1;
        self.html.push_str("<tr>");
        for cell in split_cells(row) {
            self.html.push_str("<td>");
            self.html.push_str(&format_inline(cell));
            self.html.push_str("</td>");
        }
        self.html.push_str("</tr>\n");
    }

    fn push_element(&mut self, tag: &str, content: &str) {
        self.html.push('<');
        self.html.push_str(tag);
        self.html.push('>');
        self.html.push_str(&format_inline(content));
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push_str(">\n");
    }

    fn push_key_value(&mut self, key: &str, value: &str) {
        self.html.push_str("<div class=\"kv-pair\"><span class=\"kv-label\">");
        self.html.push_str(&format_inline(key.trim()));
        self.html.push_str("</span><span class=\"kv-value\">");
        self.html.push_str(&format_inline(value.trim()));
        self.html.push_str("</span></div>\n");
    }

    fn finish(mut self) -> String {
        self.close_block();
        self.html
    }
}

/// Renders a participant detail document to a sanitized HTML fragment.
///
/// Recognised lines, in priority order: fenced code, `#`..`###` headers,
/// bullets, pipe tables (capped at [`MAX_TABLE_ROWS`] data rows),
/// blockquotes, horizontal rules, `key: value` pairs, and finally
/// paragraphs. A level-1 `Standings for <name> as of <timestamp> UTC`
/// header is dropped because the page summary already shows it.
///
/// # Arguments
///
/// * `markdown`: Full text of the detail document
///
/// # Returns
///
/// Rendered fragment together with the original text. Empty input yields an
/// empty fragment.
///
/// # Examples
///
/// ```
/// use podium::render_detail;
///
/// let doc = render_detail("Score: 100");
/// assert!(doc.html().contains("kv-label"));
/// ```
pub fn render_detail(markdown: &str) -> ParsedDetailDocument {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut writer = DetailWriter::new(markdown.len() * 2);
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        let trimmed = line.trim();
        index += 1;

        if let Some(fence) = trimmed.strip_prefix("```") {
            if matches!(writer.block, Block::Code) {
                writer.close_block();
            } else {
                writer.open_code(fence.trim());
            }
            continue;
        }

        if matches!(writer.block, Block::Code) {
            writer.push_code_line(line);
            continue;
        }

        if trimmed.is_empty() {
            writer.close_block();
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            writer.close_block();
            if !(level == 1 && STANDINGS_BANNER.is_match(text.trim())) {
                writer.push_element(&format!("h{}", level), text.trim());
            }
            continue;
        }

        if let Some(caps) = BULLET.captures(trimmed) {
            writer.push_list_item(caps.get(1).map_or("", |m| m.as_str()));
            continue;
        }

        if matches!(writer.block, Block::List(_)) {
            writer.close_block();
        }

        if trimmed.contains('|') {
            if matches!(writer.block, Block::Table(_)) {
                writer.push_table_row(trimmed);
                continue;
            }

            let next_is_separator = lines
                .get(index)
                .is_some_and(|next| TABLE_SEPARATOR.is_match(next.trim()));
            if next_is_separator {
                writer.open_table(trimmed);
                index += 1;
                continue;
            }
        } else if matches!(writer.block, Block::Table(_)) {
            writer.close_block();
        }

        if let Some(quote) = trimmed.strip_prefix("> ") {
            writer.push_element("blockquote", quote);
        } else if HORIZONTAL_RULE.is_match(trimmed) {
            writer.html.push_str("<hr>\n");
        } else if let Some(caps) = BOLD_KEY_VALUE.captures(trimmed) {
            writer.push_key_value(&caps[1], &caps[2]);
        } else if let Some(caps) = KEY_VALUE.captures(trimmed) {
            writer.push_key_value(&caps[1], &caps[2]);
        } else {
            writer.push_element("p", trimmed);
        }
    }

    ParsedDetailDocument {
        html: writer.finish(),
        raw_text: markdown.to_string(),
    }
}

/// Returns heading level and text for `# `, `## ` and `### ` lines.
fn heading(line: &str) -> Option<(u8, &str)> {
    if let Some(text) = line.strip_prefix("### ") {
        Some((3, text))
    } else if let Some(text) = line.strip_prefix("## ") {
        Some((2, text))
    } else {
        line.strip_prefix("# ").map(|text| (1, text))
    }
}

/// Splits a table row into trimmed cells, ignoring the outer pipes.
fn split_cells(row: &str) -> Vec<&str> {
    let inner = row.trim();
    let inner = inner.strip_prefix('|').unwrap_or(inner);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}
