//! Standings table parsing.
//!
//! A standings document is loose markdown with a single table whose columns
//! are rank, score, name and an optional details link. Parsing never fails:
//! cells that do not hold numbers fall back to positional defaults and rows
//! that are too short are dropped.

use regex::Regex;
use std::sync::LazyLock;

/// Separator row: a pipe, then only colons, pipes, hyphens or whitespace, then a pipe.
static SEPARATOR_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[\s:|-]*\|$").expect("valid separator pattern"));

static DETAILS_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[details\]\(([^)]+)\)").expect("valid details pattern"));

/// Name used when the name cell is empty.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Minimum number of cells a data row needs to become an entry.
const MIN_ROW_CELLS: usize = 3;

/// One ranked participant row.
///
/// The name is kept exactly as written in the document. It is not escaped;
/// every page that displays it goes through maud, which escapes on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    rank: u32,
    score: u64,
    name: String,
    details_link: Option<String>,
}

impl LeaderboardEntry {
    /// Creates an entry from already parsed values.
    pub fn new(rank: u32, score: u64, name: impl Into<String>, details_link: Option<String>) -> Self {
        Self {
            rank,
            score,
            name: name.into(),
            details_link,
        }
    }

    /// Position in the standings, starting at 1.
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Total score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Participant name as written in the standings document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative path of the participant details document, if linked.
    pub fn details_link(&self) -> Option<&str> {
        self.details_link.as_deref()
    }
}

/// Parses a standings document into entries sorted by rank.
///
/// The table starts at a header row beginning with `| Rank` or `|  |` and
/// becomes readable after the separator row. Each data row maps its cells
/// positionally:
///
/// * cell 0: rank, falling back to the number of entries parsed so far plus one
/// * cell 1: score, falling back to 0
/// * cell 2: name, falling back to [`UNKNOWN_NAME`]
/// * cell 3: optional `[details](path)` link
///
/// # Arguments
///
/// * `markdown`: Full text of the standings document
///
/// # Returns
///
/// Entries sorted ascending by rank. Empty input gives an empty vector.
///
/// # Examples
///
/// ```
/// use podium::parse_standings;
///
/// let markdown = "| Rank | Score | Name |\n|---|---|---|\n| 1 | 100 | alice |";
/// let entries = parse_standings(markdown);
/// assert_eq!(entries[0].name(), "alice");
/// ```
pub fn parse_standings(markdown: &str) -> Vec<LeaderboardEntry> {
    let mut entries = Vec::new();
    let mut in_table = false;
    let mut header_passed = false;

    for line in markdown.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with("| Rank") || trimmed.starts_with("|  |") {
            in_table = true;
            continue;
        }

        if SEPARATOR_ROW.is_match(trimmed) {
            header_passed = true;
            continue;
        }

        if !(in_table && header_passed && trimmed.starts_with('|')) {
            continue;
        }

        let cells = split_row(trimmed);
        if cells.len() < MIN_ROW_CELLS || cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let fallback_rank = u32::try_from(entries.len() + 1).unwrap_or(u32::MAX);
        let rank = leading_integer(cells[0])
            .and_then(|value| u32::try_from(value).ok())
            .filter(|value| *value > 0)
            .unwrap_or(fallback_rank);
        let score = leading_integer(cells[1])
            .and_then(|value| u64::try_from(value).ok())
            .unwrap_or(0);
        let name = if cells[2].is_empty() {
            UNKNOWN_NAME
        } else {
            cells[2]
        };
        let details_link = cells
            .get(3)
            .and_then(|cell| DETAILS_LINK.captures(cell))
            .map(|caps| caps[1].to_string());

        entries.push(LeaderboardEntry::new(rank, score, name, details_link));
    }

    entries.sort_by_key(|entry| entry.rank);
    entries
}

/// Splits a table row into trimmed cells between the outer pipes.
///
/// Interior empty cells keep their position, so `| | | Carol |` yields three
/// cells with the name in the third.
fn split_row(row: &str) -> Vec<&str> {
    let inner = row.strip_prefix('|').unwrap_or(row);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

/// Reads an optionally signed integer prefix, ignoring anything after it.
///
/// `"12th"` gives 12, `"-3"` gives -3, `"n/a"` and `""` give `None`.
fn leading_integer(cell: &str) -> Option<i64> {
    let (negative, digits) = match cell.as_bytes().first() {
        Some(b'-') => (true, &cell[1..]),
        Some(b'+') => (false, &cell[1..]),
        _ => (false, cell),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;

    Some(if negative { -value } else { value })
}
