//! Static leaderboard site generator for tournament data repositories.

mod assets;
pub mod components;
mod config;
mod discovery;
mod generators;
mod git;
mod markdown;
pub mod pages;
mod podium;
mod standings;
mod tree;
mod util;

pub use assets::write_css_assets;
pub use config::Config;
pub use discovery::{
    DateSnapshots, LATEST, README_FILE, STANDINGS_FILE, Snapshot, Tournament, discover,
    latest_tournament,
};
pub use generators::{GeneratedSite, generate_site};
pub use git::{FileEntry, list_files, read_blob, read_text};
pub use markdown::{
    MAX_TABLE_ROWS, ParsedDetailDocument, ReadmeRenderer, TRUNCATION_NOTICE, escape_html,
    format_inline, render_detail,
};
pub use podium::{
    MAX_BLOCKS, MIN_BLOCKS, PODIUM_SIZE, PodiumColumn, PodiumLayer, block_count, build_podium,
};
pub use standings::{LeaderboardEntry, UNKNOWN_NAME, parse_standings};
pub use tree::FileTree;
pub use util::{format_display_date, format_score, format_timestamp, resolve_relative, slugify};
