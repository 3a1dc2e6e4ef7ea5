//! Workflow integration tests for Podium.
//!
//! Tests the complete pipeline from a tournament data repository to the
//! generated site on disk.

mod common;

use anyhow::{Context, Result};
use podium::{Config, generate_site};
use std::fs;
use tempfile::TempDir;

use common::{config, create_tournament_repo};

const SNAPSHOT_PAGE: &str = "snapshots/2025-01-15/2025-01-15_14-30-00/index.html";
const EARLIER_PAGE: &str = "snapshots/2025-01-14/2025-01-14_10-00-00/index.html";
const ALICE_PAGE: &str = "snapshots/2025-01-15/2025-01-15_14-30-00/details/1-alice.html";

fn generate() -> Result<(TempDir, TempDir)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let repo = create_tournament_repo()?;
    let output = TempDir::new()?;
    generate_site(&config(repo.path(), output.path()))?;
    Ok((repo, output))
}

/// Tests that every expected page and asset is written.
#[test]
fn test_workflow_generates_site_layout() -> Result<()> {
    // Arrange & Act
    let (_repo, output) = generate()?;
    let out = output.path();

    // Assert
    for path in [
        "index.html",
        SNAPSHOT_PAGE,
        EARLIER_PAGE,
        ALICE_PAGE,
        "assets/leaderboard.css",
        "assets/details.css",
        "assets/markdown.css",
    ] {
        assert!(out.join(path).exists(), "{} should be generated", path);
    }

    let details_dir = out.join("snapshots/2025-01-15/2025-01-15_14-30-00/details");
    let detail_pages = fs::read_dir(&details_dir)?.count();
    assert_eq!(
        detail_pages, 1,
        "Only readable details documents produce pages"
    );

    Ok(())
}

/// Tests the generation summary.
#[test]
fn test_workflow_summary() -> Result<()> {
    // Arrange
    let repo = create_tournament_repo()?;
    let output = TempDir::new()?;

    // Act
    let site = generate_site(&config(repo.path(), output.path()))?;

    // Assert
    assert_eq!(site.snapshot_pages(), 2);
    assert_eq!(site.detail_pages(), 1);
    assert_eq!(site.index_path(), output.path().join("index.html"));

    Ok(())
}

/// Tests the index page content for the latest snapshot.
#[test]
fn test_workflow_index_content() -> Result<()> {
    // Arrange & Act
    let (_repo, output) = generate()?;
    let html = fs::read_to_string(output.path().join("index.html"))
        .context("index.html should be readable")?;

    // Assert
    assert!(html.contains("winter2025 - January 15, 2025"), "Title with date");
    assert!(html.contains("Last updated: January 15, 2025 at 14:30:00"));
    assert!(html.contains("podium-container"), "Podium rendered");
    assert!(html.contains("1.5K"), "Podium score abbreviated");
    assert!(html.contains(&format!(r#"href="{}""#, ALICE_PAGE)), "Details link for alice");
    assert_eq!(
        html.matches("details-link").count(),
        1,
        "Missing and escaping details links are dropped"
    );
    assert!(html.contains(&format!(r#"href="{}""#, EARLIER_PAGE)), "Navigation to earlier date");
    assert!(html.contains("Fastest solver"), "README rendered");
    assert!(!html.contains("<b>mallory</b>"), "Names escaped");
    assert!(html.contains("&lt;b&gt;mallory&lt;/b&gt;"));

    Ok(())
}

/// Tests relative links from a nested snapshot page.
#[test]
fn test_workflow_snapshot_page_links() -> Result<()> {
    // Arrange & Act
    let (_repo, output) = generate()?;
    let html = fs::read_to_string(output.path().join(EARLIER_PAGE))?;

    // Assert
    assert!(html.contains(r#"href="../../../assets/leaderboard.css""#));
    assert!(html.contains(r#"href="../../../index.html""#), "Latest link to index");
    assert!(html.contains("Last updated: January 14, 2025 at 10:00:00"));
    assert!(!html.contains("details-link"), "Earlier snapshot has no details");

    Ok(())
}

/// Tests the generated details page.
#[test]
fn test_workflow_details_page() -> Result<()> {
    // Arrange & Act
    let (_repo, output) = generate()?;
    let html = fs::read_to_string(output.path().join(ALICE_PAGE))?;

    // Assert
    assert!(html.contains("alice"));
    assert!(html.contains(r#"href="../../../../assets/details.css""#));
    assert!(html.contains("detail-table"), "Details table rendered");
    assert!(!html.contains("Standings for"), "Duplicate banner suppressed");

    Ok(())
}

/// Tests explicit tournament and title selection.
#[test]
fn test_workflow_explicit_tournament() -> Result<()> {
    // Arrange
    let repo = create_tournament_repo()?;
    let output = TempDir::new()?;
    let config = Config {
        tournament: Some("autumn2024".to_string()),
        title: Some("Autumn Open".to_string()),
        ..config(repo.path(), output.path())
    };

    // Act
    let site = generate_site(&config)?;
    let html = fs::read_to_string(site.index_path())?;

    // Assert
    assert_eq!(site.snapshot_pages(), 1);
    assert!(html.contains("Autumn Open - November 1, 2024"), "{}", html);
    assert!(html.contains("zed"));
    assert!(!html.contains("readme-section"), "No README for this tournament");

    Ok(())
}

/// Tests that an unknown tournament fails generation.
#[test]
fn test_workflow_unknown_tournament_fails() -> Result<()> {
    // Arrange
    let repo = create_tournament_repo()?;
    let output = TempDir::new()?;
    let config = Config {
        tournament: Some("spring2030".to_string()),
        ..config(repo.path(), output.path())
    };

    // Act
    let result = generate_site(&config);

    // Assert
    assert!(result.is_err(), "Unknown tournament should fail");

    Ok(())
}
