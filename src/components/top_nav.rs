//! Top navigation bar component

use maud::{Markup, html};

/// Labels of the tabs on the left side of the bar.
pub const LEFT_TABS: [&str; 2] = ["Article", "Talk"];

/// Labels of the tabs on the right side of the bar.
pub const RIGHT_TABS: [&str; 3] = ["Read", "Edit", "View history"];

/// Renders the tab bar shown above every page
///
/// Tabs are static links with hover styling only. "Edit" and "View
/// history" point at the source repository when edit links are configured
/// and at `#` otherwise.
///
/// # Arguments
///
/// * `edit_url`: Source-control edit URL for the current page
/// * `history_url`: Source-control history URL for the current page
///
/// # Returns
///
/// Navigation bar markup
pub fn top_nav(edit_url: Option<&str>, history_url: Option<&str>) -> Markup {
    html! {
        nav class="top-nav" {
            div class="top-nav-tabs" {
                div class="tab-group" {
                    @for label in LEFT_TABS {
                        a href="#" class="tab tab-left" { (label) }
                    }
                }
                div class="tab-group tab-group-right" {
                    @for label in RIGHT_TABS {
                        a href=(tab_href(label, edit_url, history_url)) class="tab tab-right" { (label) }
                    }
                }
            }
        }
    }
}

fn tab_href<'a>(label: &str, edit_url: Option<&'a str>, history_url: Option<&'a str>) -> &'a str {
    let target = match label {
        "Edit" => edit_url,
        "View history" => history_url,
        _ => None,
    };
    target.filter(|url| !url.is_empty()).unwrap_or("#")
}
