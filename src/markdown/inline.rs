//! Inline formatting for detail documents.
//!
//! Text is escaped first and then rewritten by a fixed cascade of patterns.
//! The order is significant: bold runs before italics so the stars of `**`
//! are never read as single-star emphasis, and links run before italics so
//! underscores in URLs stay intact. Everything after links only touches text
//! outside generated tags and outside `<code>` elements.

use regex::{Captures, Regex};
use std::sync::LazyLock;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!("valid pattern ", stringify!($name))));
    };
}

// Bold cascade. Each step assumes the previous ones consumed the better formed
// cases, so the order must not change.
pattern!(BOLD, r"\*\*([^*\n]+?)\*\*");
pattern!(BOLD_SINGLE_CLOSE, r"\*\*([^*\n]+?)\*");
pattern!(BOLD_UNCLOSED_LABEL, r"\*\*([^*\n]+?:)");
pattern!(BOLD_UNCLOSED, r"\*\*([^*\n]+)$");

pattern!(UNDERSCORE_BOLD, r"__([^_\n]+?)__");
pattern!(INLINE_CODE, r"`([^`\n]+)`");
pattern!(LINK, r"\[([^\]\n]+)\]\(([^)\s]+)\)");
pattern!(STAR_ITALIC, r"\*([^*\s][^*\n]*?)\*");
pattern!(UNDERSCORE_ITALIC, r"_([^_\n]+?)_");
pattern!(STRIKETHROUGH, r"~~([^~\n]+?)~~");
pattern!(HIGHLIGHT, r"==([^=\n]+?)==");
pattern!(LARGE_NUMBER, r"\b(\d{1,3}(?:,\d{3})+|\d{4,})\b");

/// Escapes HTML metacharacters.
///
/// # Examples
///
/// ```
/// assert_eq!(podium::escape_html("<a & b>"), "&lt;a &amp; b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formats one run of inline markdown as an HTML fragment.
///
/// # Arguments
///
/// * `text`: Raw markdown text of a heading, paragraph, list item, cell, etc.
///
/// # Returns
///
/// Escaped HTML with emphasis, code, links, strikethrough, highlights and
/// numeric emphasis applied
pub fn format_inline(text: &str) -> String {
    let html = escape_html(text);

    let html = BOLD.replace_all(&html, "<strong>$1</strong>");
    let html = BOLD_SINGLE_CLOSE.replace_all(&html, "<strong>$1</strong>");
    let html = BOLD_UNCLOSED_LABEL.replace_all(&html, "<strong>$1</strong>");
    let html = BOLD_UNCLOSED.replace_all(&html, "<strong>$1</strong>");
    let html = UNDERSCORE_BOLD.replace_all(&html, "<strong>$1</strong>");
    let html = INLINE_CODE.replace_all(&html, "<code>$1</code>");
    let html = LINK.replace_all(&html, |caps: &Captures| {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            safe_href(&caps[2]),
            &caps[1]
        )
    });

    map_text(&html, |segment| {
        let segment = STAR_ITALIC.replace_all(segment, |caps: &Captures| {
            italic_or_original(&caps[0], &caps[1])
        });
        let segment = underscore_italics(&segment);
        let segment = STRIKETHROUGH.replace_all(&segment, "<del>$1</del>");
        let segment = HIGHLIGHT.replace_all(&segment, "<mark>$1</mark>");
        let segment = LARGE_NUMBER.replace_all(&segment, r#"<span class="number">$1</span>"#);
        segment.replace('*', "")
    })
}

/// Wraps italic content unless it is purely numeric or already holds markup.
fn italic_or_original(original: &str, content: &str) -> String {
    let numeric = content
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == '.' || c == ',');
    if numeric || content.contains('<') {
        original.to_string()
    } else {
        format!("<em>{}</em>", content)
    }
}

/// Italicises `_text_` runs that stand on word boundaries.
///
/// Boundaries are checked around each match instead of inside the pattern so
/// the character after a closing `_` stays available to the next run. A
/// rejected match resumes the search one byte later, letting its closing `_`
/// open the next run.
fn underscore_italics(segment: &str) -> String {
    let mut result = String::with_capacity(segment.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(caps) = UNDERSCORE_ITALIC.captures_at(segment, search) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        let opens = !segment[..whole.start()]
            .chars()
            .next_back()
            .is_some_and(is_word_char);
        let closes = !segment[whole.end()..]
            .chars()
            .next()
            .is_some_and(is_word_char);

        if opens && closes {
            result.push_str(&segment[copied..whole.start()]);
            result.push_str(&italic_or_original(whole.as_str(), &caps[1]));
            copied = whole.end();
            search = whole.end();
        } else {
            search = whole.start() + 1;
        }
    }

    result.push_str(&segment[copied..]);
    result
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Neutralises script URLs. The URL is already escaped for attribute use.
fn safe_href(url: &str) -> &str {
    let lowered = url.trim_start().to_ascii_lowercase();
    if lowered.starts_with("javascript:") || lowered.starts_with("vbscript:") || lowered.starts_with("data:") {
        "#"
    } else {
        url
    }
}

/// Applies `f` to the text between tags, leaving tags and code content alone.
///
/// Input must already be escaped, so every `<` starts a generated tag.
fn map_text(html: &str, f: impl Fn(&str) -> String) -> String {
    let mut result = String::with_capacity(html.len() + 16);
    let mut rest = html;
    let mut code_depth = 0usize;

    while let Some(tag_start) = rest.find('<') {
        let text = &rest[..tag_start];
        if code_depth == 0 {
            result.push_str(&f(text));
        } else {
            result.push_str(text);
        }

        let tag_end = rest[tag_start..]
            .find('>')
            .map(|pos| tag_start + pos + 1)
            .unwrap_or(rest.len());
        let tag = &rest[tag_start..tag_end];

        if tag.starts_with("<code") {
            code_depth += 1;
        } else if tag == "</code>" {
            code_depth = code_depth.saturating_sub(1);
        }

        result.push_str(tag);
        rest = &rest[tag_end..];
    }

    if code_depth == 0 {
        result.push_str(&f(rest));
    } else {
        result.push_str(rest);
    }

    result
}
