//! Page layout wrapper and shell components

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::page_list::page_list;
use super::top_nav::top_nav;
use crate::route::Route;
use crate::wiki::PageDescriptor;

/// Document head metadata for one page.
#[derive(Debug, Clone, Default)]
pub struct Head<'a> {
    /// Full document title, including the site name suffix.
    pub title: String,
    pub description: Option<String>,
    pub modified_time: Option<&'a str>,
}

/// Inputs of the layout shell.
#[derive(Debug, Clone, Copy)]
pub struct ShellProps<'a> {
    pub site_name: &'a str,
    pub pages: &'a [PageDescriptor],
    pub edit_url: Option<&'a str>,
    pub history_url: Option<&'a str>,
    /// Content path of the page, e.g. `guide/setup.md`. `None` for pages
    /// without a markdown source.
    pub current_path: Option<&'a str>,
    /// Prefix leading to the site root: `../` per level, or `/`.
    pub root: &'a str,
    pub last_modified: Option<&'a str>,
}

/// What the shell wraps.
pub enum ShellState {
    /// Route content is not available yet; shows a loading indicator with
    /// no page list and no edit link.
    Pending,
    /// Route content is ready.
    Ready(Markup),
}

/// Wraps body markup in the HTML document
///
/// Provides DOCTYPE, charset, viewport, head metadata, stylesheets and the
/// anchor script. Asset paths start with `root`.
///
/// # Arguments
///
/// * `head`: Title and metadata for the document head
/// * `root`: Prefix leading from the page to the site root
/// * `body`: Page body markup
///
/// # Returns
///
/// Complete HTML document
pub fn page_wrapper(head: &Head<'_>, root: &str, body: Markup) -> Markup {

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (head.title) }
                @if let Some(description) = &head.description {
                    meta name="description" content=(description);
                }
                @if let Some(modified) = head.modified_time {
                    meta property="article:modified_time" content=(modified);
                }
                link rel="stylesheet" href=(format!("{root}assets/wiki.css"));
                link rel="stylesheet" href=(format!("{root}assets/markdown.css"));
                script src=(format!("{root}assets/anchor.js")) defer {}
            }
            body {
                (body)
            }
        }
    }
}

/// Renders navigation chrome around page content
///
/// The shell has no logic beyond passing props through: a header with the
/// site name, the top navigation bar, the page list and the main column.
/// In the pending state the page list is empty and edit links fall back
/// to `#`.
///
/// # Arguments
///
/// * `props`: Page list, edit links, current path and root prefix
/// * `state`: Pending or ready content
///
/// # Returns
///
/// Shell markup to pass to [`page_wrapper`]
pub fn shell(props: &ShellProps<'_>, state: ShellState) -> Markup {
    let current_route = props.current_path.and_then(Route::from_source_path);
    let current_slug = current_route.as_ref().map(Route::slug);

    let (pages, edit_url, history_url, child, last_modified) = match state {
        ShellState::Pending => (&[][..], None, None, loading(), None),
        ShellState::Ready(child) => (
            props.pages,
            props.edit_url,
            props.history_url,
            child,
            props.last_modified,
        ),
    };

    html! {
        div class="wiki-shell" {
            header class="site-header" {
                a class="site-name" href=(format!("{}index.html", props.root)) { (props.site_name) }
            }
            div class="wiki-body" {
                (page_list(pages, current_slug, props.root))
                div class="wiki-main" {
                    (top_nav(edit_url, history_url))
                    main class="wiki-page" data-path=[props.current_path] {
                        (child)
                    }
                    (footer(last_modified))
                }
            }
        }
    }
}

fn loading() -> Markup {
    html! {
        div class="loading" {
            div class="spinner" {}
        }
    }
}
