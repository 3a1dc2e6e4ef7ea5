//! Participant details page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::{page_wrapper, stylesheets};
use crate::discovery::Snapshot;
use crate::markdown::ParsedDetailDocument;
use crate::standings::LeaderboardEntry;
use crate::util::{format_score, root_prefix};

/// Directory depth of details pages below the site root
pub const DETAILS_PAGE_DEPTH: usize = 4;

/// Generates the details page for one participant
///
/// The summary header carries name, rank, score and snapshot time, followed
/// by the rendered details document. A back link returns to the snapshot's
/// leaderboard one directory up.
///
/// # Arguments
///
/// * `title`: Leaderboard title
/// * `snapshot`: Snapshot the standings were read from
/// * `entry`: Participant entry
/// * `document`: Rendered details document
///
/// # Returns
///
/// Complete HTML markup for the details page
pub fn generate(
    title: &str,
    snapshot: &Snapshot,
    entry: &LeaderboardEntry,
    document: &ParsedDetailDocument,
) -> Markup {
    let prefix = root_prefix(DETAILS_PAGE_DEPTH);
    let css = stylesheets(&prefix, &["details.css"]);
    let page_title = format!("{} - {}", entry.name(), title);

    page_wrapper(
        &page_title,
        &css,
        html! {
            nav class="details-nav" {
                a class="back-link" href="../index.html" {
                    i class="ph ph-arrow-left" {}
                    " Back to " (title)
                }
            }

            header class="details-summary" {
                h1 class="details-name" { (entry.name()) }
                div class="details-stats" {
                    div class="stat" {
                        span class="stat-label" { "Rank" }
                        span class="stat-value" { "#" (entry.rank()) }
                    }
                    div class="stat" {
                        span class="stat-label" { "Score" }
                        span class="stat-value" title=(entry.score()) { (format_score(entry.score())) }
                    }
                    div class="stat" {
                        span class="stat-label" { "Snapshot" }
                        span class="stat-value" { (snapshot.display_label()) }
                    }
                }
            }

            main class="details-card" {
                @if document.html().is_empty() {
                    p class="empty-details" { "No details recorded for this participant." }
                } @else {
                    div class="details-content" {
                        (PreEscaped(document.html()))
                    }
                }
            }
        },
    )
}
