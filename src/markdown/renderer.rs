//! Markdown rendering with GitHub Flavored Markdown support.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::LinkResolver;
use crate::html::TrustedHtml;

/// Errors raised while converting markdown to HTML.
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error("failed to highlight code block: {0}")]
    Highlight(#[from] syntect::Error),

    #[error("failed to format HTML: {0}")]
    Format(#[from] std::io::Error),

    #[error("rendered HTML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Markdown converted to HTML, with the first level 1 heading if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMarkdown {
    pub html: TrustedHtml,
    pub heading: Option<String>,
}

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Enables tables, strikethrough, autolinks, task lists, footnotes and
/// description lists. Headings get `id` anchors so fragments like
/// `#getting-started` resolve. Fenced code blocks with a language are
/// highlighted with syntect using `hljs-` prefixed CSS classes. When a
/// [`LinkResolver`] is attached, relative `.md` links are rewritten to the
/// generated page URLs.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
    link_resolver: Option<LinkResolver>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GFM options and heading anchors.
    pub fn new() -> Self {
        Self {
            options: gfm_options(),
            syntax_set: SyntaxSet::load_defaults_newlines(),
            link_resolver: None,
        }
    }

    /// Creates renderer that rewrites relative markdown links.
    pub fn with_link_resolver(resolver: LinkResolver) -> Self {
        let mut renderer = Self::new();
        renderer.link_resolver = Some(resolver);
        renderer
    }

    /// Renders markdown content to trusted HTML.
    ///
    /// # Errors
    ///
    /// Returns error if HTML formatting or syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<RenderedMarkdown, MarkdownError> {
        self.render_inner(content, self.link_resolver.as_ref())
    }

    /// Renders content with a per-call link resolver.
    ///
    /// Lets one renderer, and its loaded syntax definitions, serve every
    /// page of a build.
    ///
    /// # Errors
    ///
    /// Returns error if HTML formatting or syntax highlighting fails
    pub fn render_linked(
        &self,
        content: &str,
        resolver: &LinkResolver,
    ) -> Result<RenderedMarkdown, MarkdownError> {
        self.render_inner(content, Some(resolver))
    }

    fn render_inner(
        &self,
        content: &str,
        resolver: Option<&LinkResolver>,
    ) -> Result<RenderedMarkdown, MarkdownError> {
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, content, &self.options);
        let heading = first_heading(root);

        let mut buffer = Vec::with_capacity(content.len() * 2);
        comrak::format_html(root, &self.options, &mut buffer)?;
        let mut html = String::from_utf8(buffer)?;

        if let Some(resolver) = resolver {
            html = rewrite_links(&html, resolver);
        }

        let html = self.highlight_code_blocks(&html)?;

        Ok(RenderedMarkdown {
            html: TrustedHtml::new(html),
            heading,
        })
    }

    /// Replaces the body of `<code class="language-X">` blocks with
    /// syntect output.
    fn highlight_code_blocks(&self, html: &str) -> Result<String, MarkdownError> {
        const OPEN: &str = "<code class=\"language-";
        const CLOSE: &str = "</code>";

        let mut result = String::with_capacity(html.len());
        let mut rest = html;

        while let Some(start) = rest.find(OPEN) {
            let after_open = &rest[start + OPEN.len()..];
            let Some(lang_len) = after_open.find('"') else {
                break;
            };
            let language = &after_open[..lang_len];
            let Some(tag_end) = after_open[lang_len..].find('>') else {
                break;
            };
            let body_start = lang_len + tag_end + 1;
            let Some(body_len) = after_open[body_start..].find(CLOSE) else {
                break;
            };
            let body = &after_open[body_start..body_start + body_len];

            result.push_str(&rest[..start]);
            result.push_str(OPEN);
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&self.highlight_code(&html_decode(body), language)?);
            result.push_str(CLOSE);

            rest = &after_open[body_start + body_len + CLOSE.len()..];
        }

        result.push_str(rest);
        Ok(result)
    }

    fn highlight_code(&self, code: &str, language: &str) -> Result<String, MarkdownError> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let Some(syntax) = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        else {
            return Ok(html_escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(generator.finalize())
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn gfm_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;
    options.extension.header_ids = Some(String::new());

    options.parse.smart = true;

    // Content is trusted; raw HTML in pages is passed through.
    options.render.unsafe_ = true;

    options
}

/// Parses markdown and returns the text of its first level 1 heading.
///
/// Skips HTML generation and highlighting, for indexing many pages cheaply.
pub fn extract_heading(content: &str) -> Option<String> {
    let arena = Arena::new();
    let root = comrak::parse_document(&arena, content, &gfm_options());
    first_heading(root)
}

/// Text of the first level 1 heading in document order.
fn first_heading<'a>(root: &'a AstNode<'a>) -> Option<String> {
    root.descendants().find_map(|node| {
        let is_title = matches!(node.data.borrow().value, NodeValue::Heading(ref h) if h.level == 1);
        if !is_title {
            return None;
        }
        let text = heading_text(node);
        (!text.is_empty()).then_some(text)
    })
}

fn heading_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.descendants() {
        match &child.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_string()
}

/// Rewrites `href` values of anchor tags through the resolver.
fn rewrite_links(html: &str, resolver: &LinkResolver) -> String {
    const ATTR: &str = "href=\"";

    let mut result = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(tag) = rest.find("<a ") {
        let Some(attr) = rest[tag..].find(ATTR) else {
            break;
        };
        let value_start = tag + attr + ATTR.len();
        let Some(value_len) = rest[value_start..].find('"') else {
            break;
        };
        let url = &rest[value_start..value_start + value_len];

        result.push_str(&rest[..value_start]);
        match resolver.resolve(&html_decode(url)) {
            Some(resolved) => result.push_str(&html_escape(&resolved)),
            None => result.push_str(url),
        }

        rest = &rest[value_start + value_len..];
    }

    result.push_str(rest);
    result
}

/// Reverses the entity escaping comrak applies to text and attributes.
fn html_decode(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
