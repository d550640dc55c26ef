//! Page footer component

use maud::{Markup, html};

/// Renders site footer with optional last edit timestamp.
pub fn footer(last_modified: Option<&str>) -> Markup {
    html! {
        footer class="wiki-footer" {
            @if let Some(modified) = last_modified {
                p class="last-modified" {
                    "This page was last edited on "
                    time datetime=(modified) { (modified) }
                    "."
                }
            }
            p { "Generated by wikigen" }
        }
    }
}
