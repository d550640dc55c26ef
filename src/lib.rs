//! Static wiki generator for directories of markdown pages.

pub mod anchor;
mod assets;
pub mod components;
mod config;
pub mod edit;
mod error;
pub mod html;
mod markdown;
pub mod pages;
pub mod route;
mod site;
pub mod wiki;

pub use assets::write_assets;
pub use config::Config;
pub use edit::{EditLinks, github_edit_url};
pub use error::{Result, WikiError};
pub use html::TrustedHtml;
pub use markdown::{LinkResolver, MarkdownError, MarkdownRenderer, RenderedMarkdown};
pub use route::{Resolution, Route, Router, WikiPageProps, static_paths, static_props};
pub use site::{BuildReport, build};
pub use wiki::{ContentSource, FrontMatter, PageContent, PageDescriptor};
