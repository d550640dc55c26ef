//! CSS and script asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::anchor;

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const PAGE_LIST: &str = include_str!("../assets/components/page-list.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes bundled stylesheets and the anchor script to the assets directory
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    write_bundled(assets_dir, "wiki.css", &[BASE, LAYOUT, NAV, PAGE_LIST])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    write_bundled(assets_dir, "anchor.js", &[anchor::SCRIPT])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let content = parts.join("\n");
    fs::write(dir.join(name), content).with_context(|| format!("Failed to write asset: {}", name))?;
    Ok(())
}
