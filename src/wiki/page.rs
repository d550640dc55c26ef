//! Rendering a single page from its content path.

use std::fs;
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};

use super::{ContentSource, PageContent, frontmatter, resolve_category, resolve_title};
use crate::error::{Result, WikiError};
use crate::markdown::LinkResolver;
use crate::route::Route;

impl ContentSource {
    /// Renders the page stored at `path`, e.g. `guide/setup.md`.
    ///
    /// The returned content carries the full page index for navigation.
    /// Rendering an unchanged file twice yields identical HTML and
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::NotFound`] if the path does not name a markdown
    /// file inside the content root, [`WikiError::Parse`] for malformed
    /// front matter and [`WikiError::Filesystem`] for read failures
    pub fn page_content(&self, path: &str) -> Result<PageContent> {
        let route = Route::from_source_path(path).ok_or_else(|| WikiError::not_found(path))?;

        let file = self.root.join(route.source_path());
        if !file.is_file() {
            return Err(WikiError::not_found(path));
        }

        let source = fs::read_to_string(&file).map_err(|e| WikiError::filesystem(&file, e))?;
        let modified = fs::metadata(&file)
            .and_then(|m| m.modified())
            .map_err(|e| WikiError::filesystem(&file, e))?;

        let (meta, body) =
            frontmatter::split(&source).map_err(|message| WikiError::parse(&file, message))?;

        let rendered = self
            .renderer
            .render_linked(body, &LinkResolver::new(route.clone()))
            .map_err(|e| WikiError::parse(&file, e.to_string()))?;

        let pages = self.all_pages()?;

        tracing::debug!(path, "rendered page");

        Ok(PageContent {
            content: rendered.html,
            pages,
            title: resolve_title(&meta, rendered.heading, route.slug()),
            category: resolve_category(&meta, route.slug()),
            description: meta.description,
            last_modified: format_timestamp(modified),
        })
    }
}

/// Formats a file time as an RFC 3339 UTC timestamp with second precision.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Secs, true)
}
