//! Snapshot navigation components

use maud::{Markup, html};

use crate::discovery::{Snapshot, Tournament};

/// Site root relative path of a snapshot's leaderboard page
pub fn snapshot_page_path(snapshot: &Snapshot) -> String {
    format!("snapshots/{}/{}/index.html", snapshot.date(), snapshot.name())
}

/// Renders date and time navigation between snapshots
///
/// Lists every date with standings and, for the date being viewed, every
/// snapshot time. The current snapshot is marked; everything else links to
/// its own page. A "Latest" link leads back to the site index.
///
/// # Arguments
///
/// * `tournament`: Discovered tournament
/// * `current`: Snapshot shown on this page
/// * `prefix`: Relative path from this page to the site root
///
/// # Returns
///
/// Navigation markup
pub fn snapshot_nav(tournament: &Tournament, current: &Snapshot, prefix: &str) -> Markup {
    let current_day = tournament
        .dates()
        .iter()
        .find(|day| day.date() == current.date());
    let is_latest = current == tournament.latest();

    html! {
        nav class="controls" {
            div class="controls-group" {
                span class="controls-label" { i class="ph ph-calendar" {} " Date:" }
                @if is_latest {
                    span class="snapshot-link snapshot-current" { "Latest" }
                } @else {
                    a class="snapshot-link" href=(format!("{}index.html", prefix)) { "Latest" }
                }
                @for day in tournament.dates() {
                    @if day.date() == current.date() {
                        span class="snapshot-link snapshot-current" { (day.display_date()) }
                    } @else {
                        a class="snapshot-link" href=(format!("{}{}", prefix, snapshot_page_path(day.latest()))) {
                            (day.display_date())
                        }
                    }
                }
            }
            @if let Some(day) = current_day {
                div class="controls-group" {
                    span class="controls-label" { i class="ph ph-clock" {} " Time:" }
                    @for snapshot in day.timestamps() {
                        @if snapshot == current {
                            span class="snapshot-link snapshot-current" { (snapshot.display_time()) }
                        } @else {
                            a class="snapshot-link" href=(format!("{}{}", prefix, snapshot_page_path(snapshot))) {
                                (snapshot.display_time())
                            }
                        }
                    }
                }
            }
        }
    }
}
