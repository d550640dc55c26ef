//! Static site build: every route, the main page, 404 and assets.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::anchor;
use crate::assets::write_assets;
use crate::config::Config;
use crate::edit::EditLinks;
use crate::pages;
use crate::route::{Route, WikiPageProps, static_paths, static_props};
use crate::wiki::{ContentSource, PageDescriptor};

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of wiki pages rendered, the home page included when it has a source.
    pub pages: usize,
    /// Whether the main page came from `index.md` rather than the generated listing.
    pub home_from_source: bool,
    /// In-page fragment links without a target, across all pages.
    pub dangling_anchors: usize,
    /// Site root, containing `index.html`.
    pub output: PathBuf,
}

impl BuildReport {
    pub fn index_path(&self) -> PathBuf {
        self.output.join("index.html")
    }
}

/// Builds the site described by `config`
///
/// Indexes the content directory, renders one page per static route,
/// renders the main page from `index.md` or a generated listing, writes
/// `404.html` and the bundled assets. Any page error aborts the build.
///
/// # Arguments
///
/// * `config`: Validated command line configuration
///
/// # Returns
///
/// Counts and location of the generated site
///
/// # Errors
///
/// Returns error if content cannot be indexed or rendered, or output cannot be written
pub fn build(config: &Config) -> Result<BuildReport> {
    let edit_links = config.edit_links().context("Invalid edit link settings")?;
    let source = ContentSource::new(&config.content);

    info!("Indexing pages in {}", config.content.display());
    let index = source.all_pages().context("Failed to index pages")?;
    info!("Found {} pages", index.len());

    fs::create_dir_all(&config.output).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output.display()
        )
    })?;

    let mut report = BuildReport {
        pages: 0,
        home_from_source: false,
        dangling_anchors: 0,
        output: config.output.clone(),
    };

    for route in static_paths(&index) {
        let props = render_route(
            &source,
            &route,
            edit_links.as_ref(),
            &config.name,
            &config.output,
        )?;
        report.pages += 1;
        report.dangling_anchors += warn_dangling(&props);
    }

    let has_home = index.iter().any(|page| page.slug.is_empty());
    if has_home {
        let props = render_route(
            &source,
            &Route::home(),
            edit_links.as_ref(),
            &config.name,
            &config.output,
        )?;
        report.pages += 1;
        report.home_from_source = true;
        report.dangling_anchors += warn_dangling(&props);
    } else {
        info!("No index.md, generating main page");
        write_page(
            &config.output.join("index.html"),
            pages::home::generate(&index, &config.name),
        )?;
    }

    write_not_found(&config.output, &index, &config.name)?;
    write_assets(&config.output.join("assets")).context("Failed to write assets")?;

    info!(
        "Generated {} pages in {}",
        report.pages,
        config.output.display()
    );
    Ok(report)
}

fn render_route(
    source: &ContentSource,
    route: &Route,
    edit_links: Option<&EditLinks>,
    site_name: &str,
    output: &Path,
) -> Result<WikiPageProps> {
    let props = static_props(source, route, edit_links)
        .with_context(|| format!("Failed to render page: {}", route.source_path()))?;

    let path = route.output_path(output);
    write_page(&path, pages::wiki::generate(&props, site_name))?;
    debug!("Generated: {}", path.display());

    Ok(props)
}

fn warn_dangling(props: &WikiPageProps) -> usize {
    let dangling = anchor::dangling_fragments(&props.content.content);
    for fragment in &dangling {
        warn!(
            "{}: link to #{} has no matching heading",
            props.current_path, fragment
        );
    }
    dangling.len()
}

fn write_not_found(output: &Path, index: &[PageDescriptor], site_name: &str) -> Result<()> {
    let path = output.join(pages::not_found::FILE_NAME);
    write_page(&path, pages::not_found::generate(index, site_name))
}

fn write_page(path: &Path, markup: Markup) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, markup.into_string())
        .with_context(|| format!("Failed to write page to {}", path.display()))
}
