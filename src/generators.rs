//! Site generation for a tournament data repository.
//!
//! Reads every snapshot of the discovered tournament straight from the git
//! object database, so the working tree of the data repository is never
//! touched and `--ref` can point at any commit.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_css_assets;
use crate::components::snapshot_nav::snapshot_page_path;
use crate::config::Config;
use crate::discovery::{Snapshot, Tournament, discover};
use crate::git::{list_files, read_blob, read_text};
use crate::markdown::{ReadmeRenderer, render_detail};
use crate::pages::details;
use crate::pages::leaderboard::{self, LeaderboardPageData, SNAPSHOT_PAGE_DEPTH, detail_page_path};
use crate::standings::{LeaderboardEntry, parse_standings};
use crate::tree::FileTree;
use crate::util::resolve_relative;

/// Outcome of a site generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    index_path: PathBuf,
    snapshot_pages: usize,
    detail_pages: usize,
}

impl GeneratedSite {
    /// Path of the generated `index.html`.
    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Number of snapshot leaderboard pages written.
    pub fn snapshot_pages(&self) -> usize {
        self.snapshot_pages
    }

    /// Number of participant details pages written.
    pub fn detail_pages(&self) -> usize {
        self.detail_pages
    }
}

/// Generates the complete leaderboard site.
///
/// Discovers the tournament, writes one leaderboard page per snapshot plus
/// details pages for every entry with a readable details document, writes
/// the newest snapshot again as `index.html`, and finally the CSS assets.
///
/// # Arguments
///
/// * `config`: Validated configuration
///
/// # Returns
///
/// Summary of the generated site
///
/// # Errors
///
/// Returns error if:
/// - Repository cannot be read
/// - No tournament or no standings can be discovered
/// - Output files cannot be written
///
/// Unreadable standings or details documents are logged and skipped.
pub fn generate_site(config: &Config) -> Result<GeneratedSite> {
    let ref_name = config.ref_name.as_deref();

    let files = list_files(&config.repo, ref_name).context("Failed to list repository files")?;
    let tree = FileTree::from_files(files);
    let tournament = discover(&tree, &config.group, config.tournament.as_deref())
        .context("Failed to discover tournament")?;
    let title = config.title_for(tournament.name());

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let readme_html = render_readme(&config.repo, ref_name, &tournament);

    let mut snapshot_pages = 0;
    let mut detail_pages = 0;
    let index_path = config.output.join("index.html");

    for snapshot in tournament.snapshots() {
        let entries = read_entries(&config.repo, ref_name, snapshot);

        let mut detail_paths = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let path = write_detail_page(config, &title, snapshot, index + 1, entry)?;
            if path.is_some() {
                detail_pages += 1;
            }
            detail_paths.push(path);
        }

        let page = |depth| {
            leaderboard::generate(LeaderboardPageData {
                title: &title,
                tournament: &tournament,
                snapshot,
                entries: &entries,
                detail_paths: &detail_paths,
                readme_html: readme_html.as_deref(),
                depth,
            })
        };

        let snapshot_path = config.output.join(snapshot_page_path(snapshot));
        write_page(&snapshot_path, page(SNAPSHOT_PAGE_DEPTH))?;
        snapshot_pages += 1;
        log::debug!("Generated snapshot page {}", snapshot_path.display());

        if snapshot == tournament.latest() {
            write_page(&index_path, page(0))?;
            println!("Generated: {}", index_path.display());
        }
    }

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    println!(
        "Generated {} snapshot pages and {} details pages",
        snapshot_pages, detail_pages
    );

    Ok(GeneratedSite {
        index_path,
        snapshot_pages,
        detail_pages,
    })
}

/// Reads and parses a snapshot's standings.
///
/// A snapshot whose standings cannot be read renders as the empty state.
fn read_entries(repo: &Path, ref_name: Option<&str>, snapshot: &Snapshot) -> Vec<LeaderboardEntry> {
    let path = snapshot.standings_path();
    match read_text(repo, ref_name, &path) {
        Ok(markdown) => {
            let entries = parse_standings(&markdown);
            log::debug!("Parsed {} entries from {}", entries.len(), path);
            entries
        }
        Err(e) => {
            log::warn!("Failed to read standings {}: {:#}", path, e);
            Vec::new()
        }
    }
}

/// Writes the details page for an entry.
///
/// Returns the site root relative page path, or None when the entry has no
/// details link or the linked document cannot be read.
fn write_detail_page(
    config: &Config,
    title: &str,
    snapshot: &Snapshot,
    position: usize,
    entry: &LeaderboardEntry,
) -> Result<Option<String>> {
    let Some(link) = entry.details_link() else {
        return Ok(None);
    };

    let markdown = match resolve_relative(snapshot.path(), link)
        .and_then(|path| read_text(&config.repo, config.ref_name.as_deref(), &path))
    {
        Ok(markdown) => markdown,
        Err(e) => {
            log::warn!(
                "Skipping details for {} in {}: {:#}",
                entry.name(),
                snapshot.name(),
                e
            );
            return Ok(None);
        }
    };

    let document = render_detail(&markdown);
    let page_path = detail_page_path(snapshot, position, entry);
    write_page(
        &config.output.join(&page_path),
        details::generate(title, snapshot, entry, &document),
    )?;

    Ok(Some(page_path))
}

/// Renders the tournament README, if present and readable.
fn render_readme(repo: &Path, ref_name: Option<&str>, tournament: &Tournament) -> Option<String> {
    let path = tournament.readme_path()?;

    let rendered = read_blob(repo, ref_name, &path)
        .and_then(|bytes| ReadmeRenderer::new().render_bytes(bytes));

    match rendered {
        Ok(html) => Some(html),
        Err(e) => {
            log::warn!("Failed to render README {}: {:#}", path, e);
            None
        }
    }
}

fn write_page(path: &Path, html: Markup) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, html.into_string())
        .with_context(|| format!("Failed to write page {}", path.display()))
}
