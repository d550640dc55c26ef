//! URL routes, the static path set and per-page props.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::edit::EditLinks;
use crate::error::Result;
use crate::wiki::{ContentSource, PageContent, PageDescriptor};

/// Source file of the home page, served at `/`.
pub const HOME_SOURCE: &str = "index.md";

/// A page route identified by its slug.
///
/// Slugs are slash separated relative paths without extension. The empty
/// slug is the home page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Route {
    slug: String,
}

impl Route {
    /// Creates route from a slug.
    ///
    /// Returns `None` for slugs with empty, `.` or `..` segments, or with
    /// backslashes. The empty string is the home route.
    pub fn new(slug: impl Into<String>) -> Option<Self> {
        let slug = slug.into();
        if slug.is_empty() {
            return Some(Self::home());
        }
        let valid = !slug.contains('\\')
            && slug
                .split('/')
                .all(|segment| !segment.is_empty() && segment != "." && segment != "..");
        valid.then_some(Self { slug })
    }

    pub fn home() -> Self {
        Self {
            slug: String::new(),
        }
    }

    /// Creates route by joining URL path segments with `/`.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Option<Self> {
        let joined = segments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("/");
        Self::new(joined)
    }

    /// Creates route from a content path such as `guide/setup.md`.
    ///
    /// The root `index.md` maps to the home route.
    pub fn from_source_path(path: &str) -> Option<Self> {
        if path == HOME_SOURCE {
            return Some(Self::home());
        }
        let slug = path.strip_suffix(".md")?;
        if slug.is_empty() {
            return None;
        }
        Self::new(slug)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn is_home(&self) -> bool {
        self.slug.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.slug.split('/').filter(|s| !s.is_empty())
    }

    /// Content path of the markdown file, relative to the content root.
    pub fn source_path(&self) -> String {
        if self.is_home() {
            HOME_SOURCE.to_string()
        } else {
            format!("{}.md", self.slug)
        }
    }

    /// Number of directory levels between the page's HTML file and the site root.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Link target relative to the site root.
    pub fn href(&self) -> String {
        if self.is_home() {
            "index.html".to_string()
        } else {
            format!("{}/index.html", self.slug)
        }
    }

    /// Path the page is served at, e.g. `/guide/setup/`.
    pub fn url_path(&self) -> String {
        if self.is_home() {
            "/".to_string()
        } else {
            format!("/{}/", self.slug)
        }
    }

    /// Location of the generated HTML file inside the output directory.
    pub fn output_path(&self, output: &Path) -> PathBuf {
        let mut path = output.to_path_buf();
        for segment in self.segments() {
            path.push(segment);
        }
        path.join("index.html")
    }
}

/// Prefix climbing from a page at `depth` back to the site root.
pub fn relative_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Routes pre-generated from the page index, excluding the home page.
///
/// Order follows the index.
pub fn static_paths(pages: &[PageDescriptor]) -> Vec<Route> {
    pages
        .iter()
        .filter(|page| !page.slug.is_empty())
        .filter_map(|page| Route::new(page.slug.as_str()))
        .collect()
}

/// Result of resolving a request path against the generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Home,
    Page(Route),
    NotFound,
}

/// Resolves request paths against the fixed set of generated routes.
///
/// All valid routes are known at build time. Unknown paths resolve to
/// [`Resolution::NotFound`]; there is no fallback rendering.
#[derive(Debug, Clone)]
pub struct Router {
    slugs: HashSet<String>,
}

impl Router {
    pub fn new(routes: &[Route]) -> Self {
        Self {
            slugs: routes.iter().map(|r| r.slug().to_string()).collect(),
        }
    }

    /// Resolves a URL path such as `/guide/setup`, `/guide/setup/` or
    /// `/guide/setup/index.html`. Query strings and fragments are ignored.
    pub fn resolve(&self, url_path: &str) -> Resolution {
        let path = url_path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_start_matches('/');
        let slug = if path == "index.html" {
            ""
        } else {
            path.strip_suffix("/index.html")
                .unwrap_or(path)
                .trim_end_matches('/')
        };

        if slug.is_empty() {
            return Resolution::Home;
        }

        match Route::new(slug) {
            Some(route) if self.slugs.contains(route.slug()) => Resolution::Page(route),
            _ => Resolution::NotFound,
        }
    }
}

/// Everything a wiki page template needs.
#[derive(Debug, Clone)]
pub struct WikiPageProps {
    pub content: PageContent,
    pub edit_url: Option<String>,
    pub history_url: Option<String>,
    /// Content path of the page, e.g. `guide/setup.md`.
    pub current_path: String,
    pub route: Route,
}

/// Builds props for one route: rendered content plus edit links.
///
/// # Errors
///
/// Returns error if the page cannot be found, read or parsed
pub fn static_props(
    source: &ContentSource,
    route: &Route,
    edit_links: Option<&EditLinks>,
) -> Result<WikiPageProps> {
    let current_path = route.source_path();
    let content = source.page_content(&current_path)?;

    Ok(WikiPageProps {
        content,
        edit_url: crate::edit::github_edit_url(edit_links, &current_path),
        history_url: edit_links.map(|links| links.history_url(&current_path)),
        current_path,
        route: route.clone(),
    })
}
