//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::edit::EditLinks;

/// Command line configuration for wikigen.
#[derive(Debug, Clone, Parser)]
#[command(name = "wikigen", version, about, long_about = None)]
pub struct Config {
    /// Directory of markdown pages
    #[arg(default_value = ".")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name shown in the header and page titles
    #[arg(long, default_value = "Wiki")]
    pub name: String,

    /// Hosted repository URL used for edit and history links
    #[arg(long)]
    pub repo_url: Option<String>,

    /// Branch the edit links point at
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Path of the content directory inside the repository
    #[arg(long)]
    pub content_prefix: Option<String>,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Log every rendered page
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist or the
    /// repository URL is malformed.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        self.edit_links()?;
        Ok(())
    }

    /// Returns edit link settings, or `None` without a repository URL.
    ///
    /// # Errors
    ///
    /// Returns error if the repository URL is not http(s) or the branch is empty.
    pub fn edit_links(&self) -> Result<Option<EditLinks>> {
        let Some(repo_url) = &self.repo_url else {
            return Ok(None);
        };

        let links = EditLinks::new(repo_url, &self.branch, self.content_prefix.as_deref())?;
        Ok(Some(links))
    }
}
