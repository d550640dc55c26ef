//! Side page list component

use maud::{Markup, html};

use crate::route::Route;
use crate::wiki::PageDescriptor;

/// Renders the site page list in index order
///
/// Every page shows the same list. The entry for the current page is
/// marked active; pages without a source, such as the not-found page,
/// mark nothing.
///
/// # Arguments
///
/// * `pages`: Page index in scan order
/// * `current_slug`: Slug of the page being rendered, if it has one
/// * `root`: Prefix leading from the rendered page to the site root
///
/// # Returns
///
/// Sidebar markup
pub fn page_list(pages: &[PageDescriptor], current_slug: Option<&str>, root: &str) -> Markup {

    html! {
        aside class="page-list" {
            a class="page-list-home" href=(format!("{root}index.html")) { "Main page" }
            @if !pages.is_empty() {
                h2 class="page-list-heading" { "Pages" }
                ul {
                    @for page in pages {
                        @if let Some(route) = Route::new(page.slug.as_str()) {
                            li class=(if current_slug == Some(page.slug.as_str()) { "page-item active" } else { "page-item" }) {
                                a href=(format!("{root}{}", route.href())) { (page.title) }
                                span class="page-category" { (page.category) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<PageDescriptor> {
        vec![
            PageDescriptor {
                slug: "faq".to_string(),
                title: "FAQ".to_string(),
                category: "General".to_string(),
            },
            PageDescriptor {
                slug: "guide/setup".to_string(),
                title: "Setup".to_string(),
                category: "guide".to_string(),
            },
        ]
    }

    #[test]
    fn test_page_list_links_relative_to_root() {
        // Arrange & Act
        let html = page_list(&pages(), Some("guide/setup"), "../../").into_string();

        // Assert
        assert!(html.contains("href=\"../../faq/index.html\""));
        assert!(html.contains("href=\"../../guide/setup/index.html\""));
        assert!(html.contains("href=\"../../index.html\""));
    }

    #[test]
    fn test_page_list_marks_current() {
        // Arrange & Act
        let html = page_list(&pages(), Some("faq"), "../").into_string();

        // Assert
        assert_eq!(html.matches("page-item active").count(), 1);
        let active = html.find("page-item active").expect("active entry");
        let faq = html.find(">FAQ<").expect("faq entry");
        let setup = html.find(">Setup<").expect("setup entry");
        assert!(active < faq && faq < setup);
    }

    #[test]
    fn test_page_list_preserves_order() {
        // Arrange
        let mut reversed = pages();
        reversed.reverse();

        // Act
        let html = page_list(&reversed, None, "").into_string();

        // Assert
        assert!(html.find(">Setup<") < html.find(">FAQ<"));
    }

    #[test]
    fn test_empty_page_list() {
        // Arrange & Act
        let html = page_list(&[], None, "").into_string();

        // Assert
        assert!(!html.contains("<ul>"));
        assert!(html.contains("Main page"));
    }

    #[test]
    fn test_page_list_without_current_page_marks_nothing() {
        // Arrange
        let mut pages = pages();
        pages.push(PageDescriptor {
            slug: String::new(),
            title: "Home".to_string(),
            category: "General".to_string(),
        });

        // Act
        let html = page_list(&pages, None, "/").into_string();

        // Assert
        assert!(!html.contains("page-item active"));
        assert!(html.contains("href=\"/faq/index.html\""));
    }
}
