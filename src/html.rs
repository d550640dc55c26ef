//! Trusted HTML produced by the markdown renderer.

use maud::Render;

/// HTML that is injected into pages without escaping.
///
/// Values are only constructed inside this crate by the markdown renderer.
/// Content is authored by trusted contributors; raw HTML in markdown is
/// passed through, so anything rendered here can run script in a reader's
/// browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub(crate) fn new(html: String) -> Self {
        Self(html)
    }

    /// Returns the raw HTML.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Render for TrustedHtml {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    #[test]
    fn test_trusted_html_is_not_escaped() {
        // Arrange
        let trusted = TrustedHtml::new("<p>hi</p>".to_string());

        // Act
        let markup = html! { div { (trusted) } };

        // Assert
        assert_eq!(markup.into_string(), "<div><p>hi</p></div>");
    }

    #[test]
    fn test_plain_strings_are_escaped() {
        // Arrange
        let untrusted = "<script>alert(1)</script>";

        // Act
        let markup = html! { div { (untrusted) } };

        // Assert
        assert!(!markup.into_string().contains("<script>"));
    }
}
