//! Not-found page for paths outside the generated route set

use maud::{Markup, html};

use crate::components::layout::{Head, ShellProps, ShellState, page_wrapper, shell};
use crate::wiki::PageDescriptor;

/// File name static hosts serve for unknown paths.
pub const FILE_NAME: &str = "404.html";

/// Hosts serve the page at whatever path was requested, so links start
/// at the site root.
const ROOT: &str = "/";

/// Generates the not-found page written to the site root
///
/// Every route is fixed at build time, so unknown paths get this page
/// instead of a rendered fallback.
pub fn generate(pages: &[PageDescriptor], site_name: &str) -> Markup {
    let head = Head {
        title: format!("Page not found - {site_name}"),
        description: None,
        modified_time: None,
    };

    let props = ShellProps {
        site_name,
        pages,
        edit_url: None,
        history_url: None,
        current_path: None,
        root: ROOT,
        last_modified: None,
    };

    let body = html! {
        article class="wiki-article not-found" {
            h1 { "Page not found" }
            p {
                "There is no page at this address. Pick one from the list or return to the "
                a href=(format!("{ROOT}index.html")) { "main page" }
                "."
            }
        }
    };

    page_wrapper(&head, ROOT, shell(&props, ShellState::Ready(body)))
}
