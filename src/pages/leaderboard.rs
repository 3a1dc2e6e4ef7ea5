//! Leaderboard page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::{page_wrapper, stylesheets};
use crate::components::podium::podium;
use crate::components::snapshot_nav::snapshot_nav;
use crate::components::standings_table::standings_table;
use crate::discovery::{Snapshot, Tournament};
use crate::standings::LeaderboardEntry;
use crate::util::{format_display_date, root_prefix, slugify};

/// Directory depth of snapshot leaderboard pages below the site root
pub const SNAPSHOT_PAGE_DEPTH: usize = 3;

/// Data container for leaderboard page generation
pub struct LeaderboardPageData<'a> {
    pub title: &'a str,
    pub tournament: &'a Tournament,
    pub snapshot: &'a Snapshot,
    pub entries: &'a [LeaderboardEntry],
    /// Site root relative details page per entry, parallel to `entries`
    pub detail_paths: &'a [Option<String>],
    pub readme_html: Option<&'a str>,
    pub depth: usize,
}

/// Generates a leaderboard page for one snapshot
///
/// The page shows snapshot navigation, the podium for the top entries, the
/// full standings table and, when present, the tournament README. Snapshots
/// without entries show the empty state in place of podium and table.
///
/// # Arguments
///
/// * `data`: Leaderboard page data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for the leaderboard page
pub fn generate(data: LeaderboardPageData<'_>) -> Markup {
    let prefix = root_prefix(data.depth);
    let css = stylesheets(&prefix, &["leaderboard.css", "markdown.css"]);
    let title = format!(
        "{} - {}",
        data.title,
        format_display_date(data.snapshot.date())
    );
    let hrefs: Vec<Option<String>> = data
        .detail_paths
        .iter()
        .map(|path| path.as_ref().map(|path| format!("{}{}", prefix, path)))
        .collect();

    page_wrapper(
        &title,
        &css,
        html! {
            header class="leaderboard-header" {
                h1 class="leaderboard-title" {
                    i class="ph-fill ph-trophy" {}
                    " " (title)
                }
                p class="last-updated" {
                    i class="ph ph-clock" {}
                    " Last updated: " (data.snapshot.display_label())
                }
            }

            (snapshot_nav(data.tournament, data.snapshot, &prefix))

            (podium(data.entries))

            @if !data.entries.is_empty() {
                (standings_table(data.entries, &hrefs))
            }

            @if let Some(readme) = data.readme_html {
                section class="readme-section" {
                    div class="readme-card" {
                        div class="readme-header" {
                            i class="ph ph-info" {}
                            span class="readme-title" { "About this tournament" }
                        }
                        div class="readme-content" {
                            (PreEscaped(readme))
                        }
                    }
                }
            }
        },
    )
}

/// Site root relative path of an entry's details page
///
/// `position` is the 1-based place of the entry in the sorted standings.
/// Positions are unique within a snapshot, unlike ranks or name slugs.
pub fn detail_page_path(snapshot: &Snapshot, position: usize, entry: &LeaderboardEntry) -> String {
    format!(
        "snapshots/{}/{}/details/{}-{}.html",
        snapshot.date(),
        snapshot.name(),
        position,
        slugify(entry.name())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::discover;
    use crate::{FileEntry, FileTree};

    fn tournament() -> Tournament {
        let tree = FileTree::from_files(vec![
            FileEntry::new("group/cup/2025-01-15/2025-01-15_14-30-00/standings.md"),
            FileEntry::new("group/cup/2025-01-14/2025-01-14_10-00-00/standings.md"),
        ]);
        discover(&tree, "group", None).expect("Should discover tournament")
    }

    fn entries() -> Vec<LeaderboardEntry> {
        vec![
            LeaderboardEntry::new(1, 1500, "alice", Some("details/alice.md".to_string())),
            LeaderboardEntry::new(2, 900, "bob", None),
        ]
    }

    #[test]
    fn test_leaderboard_page_basic() {
        // Arrange
        let tournament = tournament();
        let entries = entries();
        let detail_paths = vec![Some(detail_page_path(tournament.latest(), 1, &entries[0])), None];

        // Act
        let html = generate(LeaderboardPageData {
            title: "Winter Cup",
            tournament: &tournament,
            snapshot: tournament.latest(),
            entries: &entries,
            detail_paths: &detail_paths,
            readme_html: None,
            depth: 0,
        })
        .into_string();

        // Assert
        assert!(
            html.contains("<title>Winter Cup - January 15, 2025 - Podium</title>"),
            "{}",
            html
        );
        assert!(html.contains("Last updated: January 15, 2025 at 14:30:00"));
        assert!(html.contains("podium-container"), "Podium should render");
        assert!(html.contains("standings-table"), "Table should render");
        assert!(
            html.contains(r#"href="snapshots/2025-01-15/2025-01-15_14-30-00/details/1-alice.html""#),
            "{}",
            html
        );
        assert!(html.contains(r#"href="assets/leaderboard.css""#));
        assert!(!html.contains("readme-section"));
    }

    #[test]
    fn test_leaderboard_page_nested_prefix() {
        // Arrange
        let tournament = tournament();
        let entries = entries();
        let detail_paths = vec![Some(detail_page_path(tournament.latest(), 1, &entries[0])), None];

        // Act
        let html = generate(LeaderboardPageData {
            title: "Winter Cup",
            tournament: &tournament,
            snapshot: tournament.latest(),
            entries: &entries,
            detail_paths: &detail_paths,
            readme_html: None,
            depth: SNAPSHOT_PAGE_DEPTH,
        })
        .into_string();

        // Assert
        assert!(html.contains(r#"href="../../../assets/leaderboard.css""#), "{}", html);
        assert!(
            html.contains(r#"href="../../../snapshots/2025-01-15/2025-01-15_14-30-00/details/1-alice.html""#),
            "{}",
            html
        );
    }

    #[test]
    fn test_leaderboard_page_empty() {
        // Arrange
        let tournament = tournament();

        // Act
        let html = generate(LeaderboardPageData {
            title: "Winter Cup",
            tournament: &tournament,
            snapshot: tournament.latest(),
            entries: &[],
            detail_paths: &[],
            readme_html: None,
            depth: 0,
        })
        .into_string();

        // Assert
        assert!(html.contains("No Tournament Data Available"));
        assert!(!html.contains("standings-table"), "No table without entries");
    }

    #[test]
    fn test_leaderboard_page_with_readme() {
        // Arrange
        let tournament = tournament();

        // Act
        let html = generate(LeaderboardPageData {
            title: "Winter Cup",
            tournament: &tournament,
            snapshot: tournament.latest(),
            entries: &entries(),
            detail_paths: &[],
            readme_html: Some("<p>Rules apply</p>"),
            depth: 0,
        })
        .into_string();

        // Assert
        assert!(html.contains("readme-section"));
        assert!(html.contains("<p>Rules apply</p>"), "README HTML is embedded as is");
    }

    #[test]
    fn test_leaderboard_page_escapes_title() {
        // Arrange
        let tournament = tournament();

        // Act
        let html = generate(LeaderboardPageData {
            title: "<script>",
            tournament: &tournament,
            snapshot: tournament.latest(),
            entries: &[],
            detail_paths: &[],
            readme_html: None,
            depth: 0,
        })
        .into_string();

        // Assert
        assert!(!html.contains("<script>"), "{}", html);
    }

    #[test]
    fn test_detail_page_path() {
        // Arrange
        let tournament = tournament();
        let entry = LeaderboardEntry::new(3, 10, "Team Rocket!", None);

        // Act
        let path = detail_page_path(tournament.latest(), 3, &entry);

        // Assert
        assert_eq!(
            path,
            "snapshots/2025-01-15/2025-01-15_14-30-00/details/3-team-rocket.html"
        );
    }

    #[test]
    fn test_detail_page_path_same_rank_and_name() {
        // Arrange
        let tournament = tournament();
        let explicit = LeaderboardEntry::new(2, 40, "Bob", None);
        let fallback = LeaderboardEntry::new(2, 30, "bob", None);

        // Act
        let first = detail_page_path(tournament.latest(), 2, &explicit);
        let second = detail_page_path(tournament.latest(), 3, &fallback);

        // Assert
        assert_ne!(first, second, "Each entry needs its own details page");
        assert!(first.ends_with("/details/2-bob.html"), "{}", first);
        assert!(second.ends_with("/details/3-bob.html"), "{}", second);
    }
}
