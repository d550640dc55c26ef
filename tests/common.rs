//! Shared test utilities for integration tests.
//!
//! Provides helpers for building temporary wiki content directories.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates temporary wiki with a home page, a top level page and a nested guide.
///
/// # Returns
///
/// Temporary directory holding the markdown sources
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_test_wiki() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let path = dir.path();

    write_file(
        path,
        "index.md",
        "# Welcome\n\nSee the [setup guide](guide/setup.md) or the [FAQ](faq.md).\n",
    )?;
    write_file(
        path,
        "faq.md",
        "---\ntitle: Frequently Asked\ndescription: Common questions\n---\n\n## Install\n\nJump to [install](#install).\n",
    )?;
    write_file(
        path,
        "guide/setup.md",
        "# Setup\n\n```rust\nfn main() {}\n```\n\nBack to [FAQ](../faq.md#install).\n",
    )?;

    Ok(dir)
}

/// Writes file to content directory, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
