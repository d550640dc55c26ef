//! Page index built by walking the content directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::{ContentSource, PageDescriptor, frontmatter, resolve_category, resolve_title};
use crate::error::{Result, WikiError};
use crate::markdown::extract_heading;
use crate::route::Route;

impl ContentSource {
    /// Lists every markdown page in scan order.
    ///
    /// Directory entries are visited sorted by file name, so the order is
    /// the same on every build and every page. Hidden files and directories
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Filesystem`] if a directory or file cannot be
    /// read and [`WikiError::Parse`] if a page has malformed front matter
    pub fn all_pages(&self) -> Result<Vec<PageDescriptor>> {
        let mut files = Vec::new();
        collect_markdown(&self.root, "", &mut files)?;

        let pages = files
            .into_iter()
            .map(|(route, path)| describe(route, &path))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = pages.len(), root = %self.root.display(), "indexed pages");
        Ok(pages)
    }
}

fn collect_markdown(dir: &Path, prefix: &str, out: &mut Vec<(Route, PathBuf)>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| WikiError::filesystem(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| WikiError::filesystem(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = %path.display(), "skipping entry with non UTF-8 name");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        let relative = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };

        let file_type = entry
            .file_type()
            .map_err(|e| WikiError::filesystem(&path, e))?;
        if file_type.is_dir() {
            collect_markdown(&path, &relative, out)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            match Route::from_source_path(&relative) {
                Some(route) => out.push((route, path)),
                None => tracing::warn!(path = %path.display(), "skipping file with unusable name"),
            }
        }
    }

    Ok(())
}

fn describe(route: Route, path: &Path) -> Result<PageDescriptor> {
    let source = fs::read_to_string(path).map_err(|e| WikiError::filesystem(path, e))?;
    let (meta, body) =
        frontmatter::split(&source).map_err(|message| WikiError::parse(path, message))?;

    let slug = route.slug().to_string();
    Ok(PageDescriptor {
        title: resolve_title(&meta, extract_heading(body), &slug),
        category: resolve_category(&meta, &slug),
        slug,
    })
}
