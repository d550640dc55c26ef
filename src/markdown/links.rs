//! Link resolution for wiki internal references.

use std::path::{Component, Path, PathBuf};

use crate::route::{Route, relative_prefix};

/// Resolves relative links between markdown files to generated page routes.
///
/// A link such as `./setup.md#install` written in `guide/intro.md` points
/// at the page generated for slug `guide/setup`. Because every page is
/// written as `<slug>/index.html`, the resolved URL is relative to the
/// current page's output directory so the site also works from `file://`.
pub struct LinkResolver {
    current: Route,
}

impl LinkResolver {
    /// Creates a resolver for links written in the page with the given route.
    pub fn new(current: Route) -> Self {
        Self { current }
    }

    /// Resolves a link href found in rendered markdown.
    ///
    /// Returns `None` when the link should be left untouched: URLs with a
    /// scheme, absolute paths, pure anchors, links to non-markdown files and
    /// links that would escape the content root.
    pub fn resolve(&self, link: &str) -> Option<String> {
        if link.is_empty() || link.starts_with('#') || link.starts_with('/') || has_scheme(link) {
            return None;
        }

        let (target, fragment) = match link.split_once('#') {
            Some((target, fragment)) => (target, Some(fragment)),
            None => (link, None),
        };

        let target_path = Path::new(target);
        if target_path.extension().is_none_or(|ext| ext != "md") {
            return None;
        }

        let current_dir = Path::new(self.current.source_path().as_str())
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let normalized = normalize(&current_dir.join(target_path))?;
        let route = Route::from_source_path(normalized.to_str()?)?;

        let mut url = format!(
            "{}{}",
            relative_prefix(self.current.depth()),
            route.href()
        );
        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(fragment);
        }
        Some(url)
    }
}

fn has_scheme(link: &str) -> bool {
    match link.split_once(':') {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Resolves `.` and `..` components, refusing to climb above the root.
fn normalize(path: &Path) -> Option<PathBuf> {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(c) => components.push(c),
            Component::ParentDir => {
                components.pop()?;
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(components.iter().collect())
}
