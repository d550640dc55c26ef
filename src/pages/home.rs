//! Generated main page for wikis without an `index.md`

use maud::{Markup, html};

use crate::components::layout::{Head, ShellProps, ShellState, page_wrapper, shell};
use crate::route::Route;
use crate::wiki::PageDescriptor;

/// Groups pages by category, categories in order of first appearance.
fn by_category(pages: &[PageDescriptor]) -> Vec<(&str, Vec<&PageDescriptor>)> {
    let mut groups: Vec<(&str, Vec<&PageDescriptor>)> = Vec::new();
    for page in pages {
        match groups.iter_mut().find(|(name, _)| *name == page.category) {
            Some((_, members)) => members.push(page),
            None => groups.push((page.category.as_str(), vec![page])),
        }
    }
    groups
}

/// Generates the main page listing every page by category
///
/// # Arguments
///
/// * `pages`: Page index in scan order
/// * `site_name`: Site name used as heading and title suffix
///
/// # Returns
///
/// Complete HTML document for `index.html`
pub fn generate(pages: &[PageDescriptor], site_name: &str) -> Markup {
    let head = Head {
        title: format!("Main page - {site_name}"),
        description: Some(format!("{site_name} - {} pages", pages.len())),
        modified_time: None,
    };

    let props = ShellProps {
        site_name,
        pages,
        edit_url: None,
        history_url: None,
        current_path: None,
        root: "",
        last_modified: None,
    };

    let body = html! {
        article class="wiki-article" {
            h1 { "Welcome to " (site_name) }
            @if pages.is_empty() {
                p class="empty-state" { "This wiki has no pages yet." }
            } @else {
                @for (category, members) in by_category(pages) {
                    section class="category" {
                        h2 { (category) }
                        ul {
                            @for page in members {
                                @if let Some(route) = Route::new(page.slug.as_str()) {
                                    li { a href=(route.href()) { (page.title) } }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    page_wrapper(&head, "", shell(&props, ShellState::Ready(body)))
}
