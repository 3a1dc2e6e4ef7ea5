//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Podium.
#[derive(Debug, Clone, Parser)]
#[command(name = "podium", version, about, long_about = None)]
pub struct Config {
    /// Tournament data repository path
    #[arg(default_value = ".")]
    pub repo: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Folder holding tournament folders
    #[arg(long, default_value = "group")]
    pub group: String,

    /// Tournament folder (defaults to the newest one in the group)
    #[arg(long)]
    pub tournament: Option<String>,

    /// Git reference to read standings from (defaults to HEAD)
    #[arg(long = "ref")]
    pub ref_name: Option<String>,

    /// Leaderboard title (defaults to the tournament folder name)
    #[arg(long)]
    pub title: Option<String>,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if repository path does not exist, or if the group or
    /// tournament is not a plain relative folder path.
    pub fn validate(&self) -> Result<()> {
        if !self.repo.exists() {
            bail!("Repository path does not exist: {}", self.repo.display());
        }

        validate_folder("Group", &self.group)?;
        if let Some(tournament) = &self.tournament {
            validate_folder("Tournament", tournament)?;
            if tournament.contains('/') {
                bail!("Tournament must be a single folder name: {}", tournament);
            }
        }

        Ok(())
    }

    /// Returns the leaderboard title for a tournament folder.
    pub fn title_for(&self, tournament: &str) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| tournament.to_string())
    }
}

/// Ensures a folder argument stays inside the repository.
fn validate_folder(label: &str, path: &str) -> Result<()> {
    if path.trim_matches('/').is_empty() {
        bail!("{} folder must not be empty", label);
    }
    if path.starts_with('/') {
        bail!("{} folder is absolute, must be relative: {}", label, path);
    }
    if path.split('/').any(|component| component == "..") {
        bail!("{} folder contains directory traversal: {}", label, path);
    }
    Ok(())
}
