//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const PODIUM: &str = include_str!("../assets/components/podium.css");
const TABLE: &str = include_str!("../assets/components/table.css");

const LEADERBOARD_PAGE: &str = include_str!("../assets/page-leaderboard.css");
const DETAILS_PAGE: &str = include_str!("../assets/page-details.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        "leaderboard.css",
        &[BASE, LAYOUT, NAV, PODIUM, TABLE, LEADERBOARD_PAGE],
    )?;
    write_bundled(assets_dir, "details.css", &[BASE, LAYOUT, TABLE, DETAILS_PAGE])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
