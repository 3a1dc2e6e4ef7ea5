//! Podium components

use maud::{Markup, html};

use crate::podium::{PodiumColumn, build_podium};
use crate::standings::LeaderboardEntry;
use crate::util::format_score;

/// Renders the podium for the top entries
///
/// Columns appear in rank order. Each column stacks its falling layers
/// above the avatar, score and name; the winner gets a crown. Names are
/// escaped by maud.
///
/// # Arguments
///
/// * `entries`: Entries sorted by rank
///
/// # Returns
///
/// Podium markup, or the empty state when there are no entries
pub fn podium(entries: &[LeaderboardEntry]) -> Markup {
    let columns = build_podium(entries);

    if columns.is_empty() {
        return empty_state();
    }

    html! {
        section class="podium-container" {
            @for column in &columns {
                (podium_column(column))
            }
        }
    }
}

fn podium_column(column: &PodiumColumn<'_>) -> Markup {
    let entry = column.entry();
    let fallback = format!("this.onerror=null;this.src='{}'", column.fallback_avatar_url());

    html! {
        div class=(format!("podium-column position-{}", entry.rank())) {
            @if column.is_winner() {
                div class="crown" { i class="ph-fill ph-crown" {} }
            }
            div class="podium-avatar" {
                img class="profile-image" src=(column.avatar_url()) alt=(entry.name()) onerror=(fallback);
            }
            div class="podium-blocks" {
                @for layer in column.layers() {
                    div class="tetris-layer"
                        style=(format!(
                            "animation-delay: {:.1}s; --random-rotation: {:.2}deg",
                            layer.delay_secs(),
                            layer.rotation_deg()
                        )) {
                        div class="tetris-block" {}
                        div class="tetris-block" {}
                    }
                }
            }
            div class="podium-info" {
                div class="podium-score" { (format_score(entry.score())) }
                div class="podium-name" { (entry.name()) }
            }
            div class="podium-rank" { (entry.rank()) }
        }
    }
}

/// Renders the placeholder shown when a snapshot has no entries
pub fn empty_state() -> Markup {
    html! {
        section class="empty-state" {
            div class="empty-state-content" {
                i class="ph ph-trophy empty-icon" {}
                h3 { "No Tournament Data Available" }
                p { "Unable to load tournament standings at this time." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_podium_renders_top_four() {
        // Arrange
        let entries: Vec<LeaderboardEntry> = (1..=6)
            .map(|rank| LeaderboardEntry::new(rank, 1000 - u64::from(rank) * 100, format!("player{}", rank), None))
            .collect();

        // Act
        let html = podium(&entries).into_string();

        // Assert
        assert_eq!(html.matches("podium-column position-").count(), 4);
        assert!(html.contains("player4"), "Fourth place is on the podium");
        assert!(!html.contains("player5"), "Fifth place is not on the podium");
        assert_eq!(html.matches("ph-crown").count(), 1, "Only the winner is crowned");
    }

    #[test]
    fn test_podium_winner_layers() {
        // Arrange
        let entries = vec![LeaderboardEntry::new(1, 10, "solo", None)];

        // Act
        let html = podium(&entries).into_string();

        // Assert
        assert_eq!(html.matches("tetris-layer").count(), 15);
        assert_eq!(html.matches("tetris-block").count(), 30);
    }

    #[test]
    fn test_podium_escapes_names() {
        // Arrange
        let entries = vec![LeaderboardEntry::new(1, 10, "<script>x</script>", None)];

        // Act
        let html = podium(&entries).into_string();

        // Assert
        assert!(!html.contains("<script>"), "Name must be escaped: {}", html);
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_podium_abbreviates_score() {
        // Arrange
        let entries = vec![LeaderboardEntry::new(1, 1500, "a", None)];

        // Act
        let html = podium(&entries).into_string();

        // Assert
        assert!(html.contains(r#"<div class="podium-score">1.5K</div>"#), "{}", html);
    }

    #[test]
    fn test_podium_empty_state() {
        // Act
        let html = podium(&[]).into_string();

        // Assert
        assert!(html.contains("No Tournament Data Available"));
    }
}
