//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! Converts page bodies to [`TrustedHtml`](crate::html::TrustedHtml) with
//! comrak, highlights fenced code with syntect and rewrites relative links
//! between wiki pages to their generated routes.

mod links;
mod renderer;

pub use links::LinkResolver;
pub use renderer::{MarkdownError, MarkdownRenderer, RenderedMarkdown, extract_heading};
