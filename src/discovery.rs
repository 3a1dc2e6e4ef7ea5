//! Tournament snapshot discovery.
//!
//! The data repository is laid out as
//! `<group>/<tournament>/<YYYY-MM-DD>/<YYYY-MM-DD_HH-MM-SS>/standings.md`.
//! Every timestamp folder holding a `standings.md` is one snapshot of the
//! standings. Folder names sort chronologically, so newest first is simply
//! descending name order.

use anyhow::{Result, bail};
use regex::Regex;
use std::sync::LazyLock;

use crate::tree::FileTree;
use crate::util::{format_display_date, format_timestamp};

static DATE_FOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date folder pattern"));

static TIMESTAMP_FOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2}$").expect("valid timestamp folder pattern")
});

/// Standings file expected in every snapshot folder.
pub const STANDINGS_FILE: &str = "standings.md";

/// Optional tournament description at the tournament folder root.
pub const README_FILE: &str = "README.md";

/// Keyword selecting the newest date or timestamp.
pub const LATEST: &str = "latest";

/// One timestamp folder containing standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    name: String,
    date: String,
    path: String,
}

impl Snapshot {
    /// Timestamp folder name, `YYYY-MM-DD_HH-MM-SS`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date folder the snapshot belongs to.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Repository path of the timestamp folder.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Repository path of the snapshot's standings document.
    pub fn standings_path(&self) -> String {
        format!("{}/{}", self.path, STANDINGS_FILE)
    }

    /// Time of day as `HH:MM:SS`.
    pub fn display_time(&self) -> String {
        format_timestamp(&self.name)
    }

    /// Long form date and time, e.g. `January 2, 2025 at 09:30:00`.
    pub fn display_label(&self) -> String {
        format!("{} at {}", format_display_date(&self.date), self.display_time())
    }
}

/// All snapshots recorded on one date, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSnapshots {
    date: String,
    timestamps: Vec<Snapshot>,
}

impl DateSnapshots {
    /// Date folder name, `YYYY-MM-DD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Date formatted for display.
    pub fn display_date(&self) -> String {
        format_display_date(&self.date)
    }

    /// Snapshots on this date, newest first. Never empty.
    pub fn timestamps(&self) -> &[Snapshot] {
        &self.timestamps
    }

    /// Newest snapshot of the day.
    pub fn latest(&self) -> &Snapshot {
        &self.timestamps[0]
    }
}

/// Discovered tournament with its snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    group: String,
    name: String,
    dates: Vec<DateSnapshots>,
    has_readme: bool,
}

impl Tournament {
    /// Group folder holding the tournament.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Tournament folder name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Repository path of the tournament folder.
    pub fn path(&self) -> String {
        format!("{}/{}", self.group, self.name)
    }

    /// Repository path of the tournament README, if there is one.
    pub fn readme_path(&self) -> Option<String> {
        self.has_readme
            .then(|| format!("{}/{}", self.path(), README_FILE))
    }

    /// Dates with at least one snapshot, newest first. Never empty.
    pub fn dates(&self) -> &[DateSnapshots] {
        &self.dates
    }

    /// Every snapshot, newest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.dates.iter().flat_map(|date| date.timestamps.iter())
    }

    /// Newest snapshot overall.
    pub fn latest(&self) -> &Snapshot {
        self.dates[0].latest()
    }

    /// Picks a snapshot by date and timestamp, either of which may be [`LATEST`].
    ///
    /// # Errors
    ///
    /// Returns error if the date or the timestamp is not known.
    pub fn select(&self, date: &str, timestamp: &str) -> Result<&Snapshot> {
        let day = if date == LATEST {
            &self.dates[0]
        } else {
            match self.dates.iter().find(|d| d.date == date) {
                Some(day) => day,
                None => bail!("Selected date not found: {}", date),
            }
        };

        if timestamp == LATEST {
            return Ok(day.latest());
        }

        match day.timestamps.iter().find(|t| t.name == timestamp) {
            Some(snapshot) => Ok(snapshot),
            None => bail!("Selected timestamp not found: {}", timestamp),
        }
    }
}

/// Returns the newest tournament folder under `group`, if any.
pub fn latest_tournament<'a>(tree: &'a FileTree, group: &str) -> Option<&'a str> {
    tree.subdirs_at(group).into_iter().max()
}

/// Discovers all snapshots of a tournament.
///
/// When `tournament` is None the newest tournament folder in `group` is used.
/// Date folders that contain no timestamp folder with a standings file are
/// left out, as are timestamp folders without one.
///
/// # Arguments
///
/// * `tree`: Directory tree of the data repository
/// * `group`: Folder holding tournament folders
/// * `tournament`: Explicit tournament folder, or None for the newest
///
/// # Errors
///
/// Returns error if no tournament folder exists or no snapshot is found.
pub fn discover(tree: &FileTree, group: &str, tournament: Option<&str>) -> Result<Tournament> {
    let name = match tournament {
        Some(name) => name,
        None => match latest_tournament(tree, group) {
            Some(name) => {
                log::info!("Using latest tournament folder: {}", name);
                name
            }
            None => bail!("No tournament folders found in {}", group),
        },
    };

    let tournament_path = format!("{}/{}", group, name);

    let mut date_folders: Vec<&str> = tree
        .subdirs_at(&tournament_path)
        .into_iter()
        .filter(|folder| DATE_FOLDER.is_match(folder))
        .collect();
    date_folders.sort_by(|a, b| b.cmp(a));

    let mut dates = Vec::new();
    for date in date_folders {
        let date_path = format!("{}/{}", tournament_path, date);

        let mut timestamp_folders: Vec<&str> = tree
            .subdirs_at(&date_path)
            .into_iter()
            .filter(|folder| TIMESTAMP_FOLDER.is_match(folder))
            .collect();
        timestamp_folders.sort_by(|a, b| b.cmp(a));

        let timestamps: Vec<Snapshot> = timestamp_folders
            .into_iter()
            .filter_map(|timestamp| {
                let path = format!("{}/{}", date_path, timestamp);
                if tree.has_file(&path, STANDINGS_FILE) {
                    Some(Snapshot {
                        name: timestamp.to_string(),
                        date: date.to_string(),
                        path,
                    })
                } else {
                    log::debug!("Skipping {}: no {}", path, STANDINGS_FILE);
                    None
                }
            })
            .collect();

        if timestamps.is_empty() {
            log::debug!("Skipping date folder without standings: {}", date_path);
            continue;
        }

        dates.push(DateSnapshots {
            date: date.to_string(),
            timestamps,
        });
    }

    if dates.is_empty() {
        bail!("No standings files found in the tournament folder {}", tournament_path);
    }

    log::info!(
        "Found {} dates with standings in {}",
        dates.len(),
        tournament_path
    );

    Ok(Tournament {
        group: group.to_string(),
        name: name.to_string(),
        has_readme: tree.has_file(&tournament_path, README_FILE),
        dates,
    })
}
