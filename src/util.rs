//! Utility functions for podium

use anyhow::{Result, bail};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the `../` prefix leading from a page at `depth` back to the site root.
pub fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Formats a score for compact display.
///
/// Scores of a million or more are shown in millions with one decimal
/// (`2.5M`), scores of a thousand or more in thousands (`1.5K`). A trailing
/// `.0` is dropped, so 2,000,000 is `2M`. Smaller scores are printed as is.
///
/// # Arguments
///
/// * `score`: Score to format
///
/// # Returns
///
/// Abbreviated score string
pub fn format_score(score: u64) -> String {
    const THOUSAND: u64 = 1_000;
    const MILLION: u64 = 1_000_000;

    let (value, suffix) = if score >= MILLION {
        (score as f64 / MILLION as f64, "M")
    } else if score >= THOUSAND {
        (score as f64 / THOUSAND as f64, "K")
    } else {
        return score.to_string();
    };

    let formatted = format!("{:.1}", value);
    let formatted = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{}{}", formatted, suffix)
}

/// Formats a `YYYY-MM-DD` date as `Month D, YYYY`.
///
/// Input that is not a valid date is returned unchanged.
pub fn format_display_date(date: &str) -> String {
    parse_display_date(date).unwrap_or_else(|| date.to_string())
}

fn parse_display_date(date: &str) -> Option<String> {
    let mut parts = date.splitn(3, '-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let name = MONTHS.get(month.checked_sub(1)?)?;

    (1..=31)
        .contains(&day)
        .then(|| format!("{} {}, {}", name, day, year))
}

/// Extracts `HH:MM:SS` from a `YYYY-MM-DD_HH-MM-SS` folder name.
///
/// Other input is returned unchanged.
pub fn format_timestamp(timestamp: &str) -> String {
    let Some((_, time)) = timestamp.split_once('_') else {
        return timestamp.to_string();
    };

    let fields: Vec<&str> = time.split('-').collect();
    let valid = fields.len() == 3
        && fields
            .iter()
            .all(|f| f.len() == 2 && f.bytes().all(|b| b.is_ascii_digit()));

    if valid {
        fields.join(":")
    } else {
        timestamp.to_string()
    }
}

/// Converts a participant name to a file name safe slug.
///
/// ASCII letters and digits are kept (lowercased), every other run of
/// characters becomes a single `-`. Names with nothing usable map to
/// `participant`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "participant".to_string()
    } else {
        slug.to_string()
    }
}

/// Resolves a relative link against a repository directory.
///
/// `.` components are dropped and `..` pops the previous component. The
/// result is a slash separated repository path.
///
/// # Arguments
///
/// * `base_dir`: Repository directory the link appears in
/// * `link`: Relative link such as `details/alice.md` or `../shared/bob.md`
///
/// # Errors
///
/// Returns error if the link is absolute, is a URL, or climbs above the
/// repository root.
pub fn resolve_relative(base_dir: &str, link: &str) -> Result<String> {
    if link.starts_with('/') {
        bail!("Link is absolute, must be relative: {}", link);
    }
    if link.contains("://") {
        bail!("Link is a URL, not a repository path: {}", link);
    }

    let mut components: Vec<&str> = base_dir.split('/').filter(|c| !c.is_empty()).collect();

    for component in link.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                if components.pop().is_none() {
                    bail!("Link escapes repository root: {}", link);
                }
            }
            other => components.push(other),
        }
    }

    if components.is_empty() {
        bail!("Link resolves to repository root: {}", link);
    }

    Ok(components.join("/"))
}
