//! Standings table component

use maud::{Markup, html};

use crate::standings::LeaderboardEntry;

/// Renders the full standings table
///
/// # Arguments
///
/// * `entries`: Entries sorted by rank
/// * `details_hrefs`: Details page link per entry, relative to the current
///   page. Entries without a link, or past the end of the slice, show no link.
///
/// # Returns
///
/// Table markup
pub fn standings_table(entries: &[LeaderboardEntry], details_hrefs: &[Option<String>]) -> Markup {
    html! {
        section class="standings" {
            h2 class="section-title" { i class="ph ph-list-numbers" {} " Full Standings" }
            div class="table-wrapper" {
                table class="standings-table" {
                    thead {
                        tr {
                            th class="col-rank" { "Rank" }
                            th class="col-score" { "Score" }
                            th class="col-name" { "Name" }
                            th class="col-details" { "Details" }
                        }
                    }
                    tbody {
                        @for (i, entry) in entries.iter().enumerate() {
                            tr class=(row_class(entry)) {
                                td class="col-rank" { (entry.rank()) }
                                td class="col-score" { (entry.score()) }
                                td class="col-name" { (entry.name()) }
                                td class="col-details" {
                                    @if let Some(Some(href)) = details_hrefs.get(i) {
                                        a class="details-link" href=(href) {
                                            i class="ph ph-file-text" {}
                                            " View"
                                        }
                                    } @else {
                                        span class="no-details" { "-" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn row_class(entry: &LeaderboardEntry) -> &'static str {
    match entry.rank() {
        1 => "standings-row top-1",
        2 => "standings-row top-2",
        3 => "standings-row top-3",
        _ => "standings-row",
    }
}
