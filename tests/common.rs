//! Shared test utilities for integration tests.
//!
//! Provides helper functions for creating temporary tournament data
//! repositories and performing common git operations used across multiple
//! test files.

#![allow(dead_code)]

use anyhow::Result;
use podium::Config;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Latest snapshot folder of the sample tournament.
pub const LATEST_SNAPSHOT: &str = "group/winter2025/2025-01-15/2025-01-15_14-30-00";

/// Earlier snapshot folder of the sample tournament.
pub const EARLIER_SNAPSHOT: &str = "group/winter2025/2025-01-14/2025-01-14_10-00-00";

/// Creates temporary git repository with test configuration.
///
/// Sets up a clean git repository with user name and email configured.
/// Uses anyhow::Result for proper error propagation in integration tests.
///
/// # Returns
///
/// Temporary directory containing initialized git repository
///
/// # Errors
///
/// Returns error if git commands fail or directory creation fails
pub fn create_test_repo() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let path = dir.path();

    git(path, &["init"])?;
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    git(path, &["config", "commit.gpgsign", "false"])?;

    Ok(dir)
}

/// Commits staged changes and returns commit hash.
///
/// # Errors
///
/// Returns error if commit fails or hash cannot be retrieved
pub fn git_commit(repo_path: &Path, message: &str) -> Result<String> {
    git(repo_path, &["commit", "-m", message])?;

    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(repo_path)
        .output()?;

    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

/// Stages files in repository.
///
/// # Errors
///
/// Returns error if git add fails
pub fn git_add(repo_path: &Path, files: &[&str]) -> Result<()> {
    let mut args = vec!["add"];
    args.extend_from_slice(files);
    git(repo_path, &args)
}

/// Runs a git command, failing on a non-zero exit status.
///
/// # Errors
///
/// Returns error if git cannot be spawned or exits unsuccessfully
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Writes file to repository, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(repo_path: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = repo_path.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Creates a committed tournament data repository.
///
/// Layout:
///
/// * `group/autumn2024`: an older tournament with one snapshot
/// * `group/winter2025`: two dates, a README, and details documents for the
///   latest snapshot. Bob's details link points at a missing file.
///
/// # Errors
///
/// Returns error if any file write or git command fails
pub fn create_tournament_repo() -> Result<TempDir> {
    let repo = create_test_repo()?;
    let path = repo.path();

    write_file(
        path,
        "group/autumn2024/2024-11-01/2024-11-01_12-00-00/standings.md",
        "| Rank | Score | Name |\n|---|---|---|\n| 1 | 10 | zed |\n",
    )?;

    write_file(
        path,
        "group/winter2025/README.md",
        "# Winter Cup\n\nFastest solver **wins**.\n",
    )?;

    write_file(
        path,
        &format!("{}/standings.md", EARLIER_SNAPSHOT),
        "# Standings\n\n| Rank | Score | Name | Details |\n|---|---|---|---|\n| 1 | 800 | bob | |\n| 2 | 700 | alice | |\n",
    )?;

    write_file(
        path,
        &format!("{}/standings.md", LATEST_SNAPSHOT),
        concat!(
            "# Standings\n\n",
            "| Rank | Score | Name | Details |\n",
            "|------|------:|------|---------|\n",
            "| 1 | 1500 | alice | [details](details/alice.md) |\n",
            "| 2 | 900 | bob | [details](details/bob.md) |\n",
            "| 3 | 120 | <b>mallory</b> | |\n",
            "| 4 | 80 | carol | [details](../../../../../etc/passwd) |\n",
            "| 5 | 10 | dave | |\n",
        ),
    )?;

    write_file(
        path,
        &format!("{}/details/alice.md", LATEST_SNAPSHOT),
        concat!(
            "# Standings for alice as of 2025-01-15 14:30:00 UTC\n\n",
            "**Total:** 1500\n\n",
            "| Task | Points |\n",
            "|------|--------|\n",
            "| Parser | 1000 |\n",
            "| Renderer | 500 |\n",
        ),
    )?;

    git_add(path, &["."])?;
    git_commit(path, "Add standings")?;

    Ok(repo)
}

/// Configuration generating into `output` from `repo`.
pub fn config(repo: &Path, output: &Path) -> Config {
    Config {
        repo: repo.to_path_buf(),
        output: output.to_path_buf(),
        group: "group".to_string(),
        tournament: None,
        ref_name: None,
        title: None,
        no_open: true,
    }
}

