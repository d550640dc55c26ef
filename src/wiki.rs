//! Wiki content: page index and page rendering.
//!
//! A [`ContentSource`] wraps a directory of markdown files. Each file is a
//! page identified by its slug, the relative path without the `.md`
//! extension. The root `index.md` is the home page with the empty slug.

mod frontmatter;
mod index;
mod page;

use std::path::{Path, PathBuf};

pub use frontmatter::FrontMatter;

use crate::html::TrustedHtml;
use crate::markdown::MarkdownRenderer;

/// Category assigned to top level pages without one in front matter.
pub const DEFAULT_CATEGORY: &str = "General";

/// Title used for the home page when nothing else names it.
pub const HOME_TITLE: &str = "Home";

/// Navigation entry for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub slug: String,
    pub title: String,
    pub category: String,
}

/// A rendered page with the site navigation it is shown with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub content: TrustedHtml,
    pub pages: Vec<PageDescriptor>,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    /// RFC 3339 UTC timestamp of the file's modification time.
    pub last_modified: String,
}

/// Directory of markdown pages.
pub struct ContentSource {
    root: PathBuf,
    renderer: MarkdownRenderer<'static>,
}

impl ContentSource {
    /// Creates content source rooted at `root`.
    ///
    /// Nothing is read until pages are requested.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            renderer: MarkdownRenderer::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Picks the page title: front matter, then first heading, then slug.
fn resolve_title(meta: &FrontMatter, heading: Option<String>, slug: &str) -> String {
    meta.title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or(heading)
        .unwrap_or_else(|| match slug.rsplit('/').next() {
            Some(last) if !last.is_empty() => last.to_string(),
            _ => HOME_TITLE.to_string(),
        })
}

/// Picks the page category: front matter, then top level directory.
fn resolve_category(meta: &FrontMatter, slug: &str) -> String {
    if let Some(category) = meta.category.as_deref().map(str::trim)
        && !category.is_empty()
    {
        return category.to_string();
    }

    match slug.split_once('/') {
        Some((dir, _)) => dir.to_string(),
        None => DEFAULT_CATEGORY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: Option<&str>, category: Option<&str>) -> FrontMatter {
        FrontMatter {
            title: title.map(str::to_string),
            category: category.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn test_title_prefers_front_matter() {
        // Arrange & Act
        let title = resolve_title(
            &meta(Some("From Meta"), None),
            Some("From Heading".to_string()),
            "guide/setup",
        );

        // Assert
        assert_eq!(title, "From Meta");
    }

    #[test]
    fn test_title_falls_back_to_heading_then_slug() {
        assert_eq!(
            resolve_title(&meta(None, None), Some("Heading".to_string()), "a/b"),
            "Heading"
        );
        assert_eq!(resolve_title(&meta(Some("  "), None), None, "a/b"), "b");
        assert_eq!(resolve_title(&meta(None, None), None, ""), HOME_TITLE);
    }

    #[test]
    fn test_category_resolution() {
        assert_eq!(
            resolve_category(&meta(None, Some("Guides")), "faq"),
            "Guides"
        );
        assert_eq!(resolve_category(&meta(None, None), "guide/setup"), "guide");
        assert_eq!(resolve_category(&meta(None, None), "faq"), DEFAULT_CATEGORY);
        assert_eq!(resolve_category(&meta(None, Some("")), ""), DEFAULT_CATEGORY);
    }
}
