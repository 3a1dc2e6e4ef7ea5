//! Page footer component

use maud::{Markup, html};

/// Renders the site footer
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            p {
                "Generated by "
                a href="https://crates.io/crates/podium" target="_blank" rel="noopener noreferrer" { "Podium" }
            }
        }
    }
}
