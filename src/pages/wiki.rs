//! Wiki article page generation

use maud::{Markup, html};

use crate::anchor::CONTENT_ID;
use crate::components::layout::{Head, ShellProps, ShellState, page_wrapper, shell};
use crate::route::{WikiPageProps, relative_prefix};

/// Generates the HTML document for one wiki page
///
/// Wraps the rendered markdown in the layout shell and emits the page
/// title, description and modification time as head metadata. Rendered
/// content is placed in the `#wiki-content` container the anchor script
/// searches.
///
/// # Arguments
///
/// * `props`: Rendered content, page list, edit links and current path
/// * `site_name`: Suffix for the document title
///
/// # Returns
///
/// Complete HTML document
pub fn generate(props: &WikiPageProps, site_name: &str) -> Markup {
    let page = &props.content;
    let root = relative_prefix(props.route.depth());

    let head = Head {
        title: format!("{} - {}", page.title, site_name),
        description: Some(
            page.description
                .clone()
                .unwrap_or_else(|| format!("{} - {}", page.title, page.category)),
        ),
        modified_time: Some(&page.last_modified),
    };

    let shell_props = ShellProps {
        site_name,
        pages: &page.pages,
        edit_url: props.edit_url.as_deref(),
        history_url: props.history_url.as_deref(),
        current_path: Some(&props.current_path),
        root: &root,
        last_modified: Some(&page.last_modified),
    };

    let article = html! {
        article class="wiki-article" {
            div class="article-category" {
                "Category: "
                span { (page.category) }
            }
            div id=(CONTENT_ID) class="prose" {
                (page.content)
            }
        }
    };

    page_wrapper(&head, &root, shell(&shell_props, ShellState::Ready(article)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::TrustedHtml;
    use crate::route::Route;
    use crate::wiki::{PageContent, PageDescriptor};

    fn props(slug: &str, title: &str, edit_url: Option<&str>) -> WikiPageProps {
        let route = Route::new(slug).expect("valid slug");
        WikiPageProps {
            content: PageContent {
                content: TrustedHtml::new("<h2 id=\"usage\">Usage</h2><p>Text</p>".to_string()),
                pages: vec![PageDescriptor {
                    slug: slug.to_string(),
                    title: title.to_string(),
                    category: "Guides".to_string(),
                }],
                title: title.to_string(),
                category: "Guides".to_string(),
                description: None,
                last_modified: "2026-03-04T05:06:07Z".to_string(),
            },
            edit_url: edit_url.map(str::to_string),
            history_url: None,
            current_path: route.source_path(),
            route,
        }
    }

    #[test]
    fn test_generate_head_metadata() {
        // Arrange
        let props = props("guide/setup", "Title", None);

        // Act
        let html = generate(&props, "Wiki").into_string();

        // Assert
        assert!(html.contains("<title>Title - Wiki</title>"));
        assert!(html.contains("content=\"Title - Guides\""));
        assert!(html.contains("content=\"2026-03-04T05:06:07Z\""));
    }

    #[test]
    fn test_generate_injects_trusted_content() {
        // Arrange
        let props = props("faq", "FAQ", None);

        // Act
        let html = generate(&props, "Wiki").into_string();

        // Assert
        assert!(html.contains("<div id=\"wiki-content\" class=\"prose\"><h2 id=\"usage\">Usage</h2>"));
    }

    #[test]
    fn test_generate_relative_assets_for_nested_page() {
        // Arrange
        let props = props("guide/setup", "Setup", None);

        // Act
        let html = generate(&props, "Wiki").into_string();

        // Assert
        assert!(html.contains("href=\"../../assets/wiki.css\""));
        assert!(html.contains("data-path=\"guide/setup.md\""));
    }

    #[test]
    fn test_generate_edit_link() {
        // Arrange
        let edit = "https://github.com/acme/wiki/edit/main/faq.md";
        let props = props("faq", "FAQ", Some(edit));

        // Act
        let html = generate(&props, "Wiki").into_string();

        // Assert
        assert!(html.contains(&format!("href=\"{edit}\"")));
    }

    #[test]
    fn test_front_matter_description_preferred() {
        // Arrange
        let mut props = props("faq", "FAQ", None);
        props.content.description = Some("Answers".to_string());

        // Act
        let html = generate(&props, "Wiki").into_string();

        // Assert
        assert!(html.contains("name=\"description\" content=\"Answers\""));
    }
}
