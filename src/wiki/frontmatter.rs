//! YAML front matter at the top of markdown pages.

use serde::Deserialize;

/// Page metadata declared in a `---` delimited YAML block.
///
/// All fields are optional. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Splits a markdown document into front matter and body.
///
/// The block must start on the first line (a leading BOM is allowed) and
/// end with a line containing only `---` or `...`. Documents without an
/// opening delimiter have no front matter and are returned whole.
///
/// # Errors
///
/// Returns a message describing the problem if the block is never closed
/// or the YAML does not describe a mapping of the expected fields
pub fn split(source: &str) -> Result<(FrontMatter, &str), String> {
    let source = source.trim_start_matches('\u{feff}');
    let Some(after_open) = strip_delimiter_line(source, "---") else {
        return Ok((FrontMatter::default(), source));
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            let yaml = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return Ok((parse(yaml)?, body));
        }
        offset += line.len();
    }

    Err("front matter block is not closed with `---`".to_string())
}

fn strip_delimiter_line<'a>(source: &'a str, delimiter: &str) -> Option<&'a str> {
    let (first, rest) = match source.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (source, ""),
    };
    (first.trim_end() == delimiter).then_some(rest)
}

fn parse(yaml: &str) -> Result<FrontMatter, String> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| format!("invalid front matter: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_front_matter() {
        // Arrange
        let source = "# Title\n\nBody";

        // Act
        let (meta, body) = split(source).expect("Should parse");

        // Assert
        assert_eq!(meta, FrontMatter::default());
        assert_eq!(body, source);
    }

    #[test]
    fn test_front_matter_fields() {
        // Arrange
        let source = "---\ntitle: Setup\ncategory: Guides\ndescription: How to\n---\n# Heading\n";

        // Act
        let (meta, body) = split(source).expect("Should parse");

        // Assert
        assert_eq!(meta.title.as_deref(), Some("Setup"));
        assert_eq!(meta.category.as_deref(), Some("Guides"));
        assert_eq!(meta.description.as_deref(), Some("How to"));
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        // Arrange
        let source = "---\ntags: [a, b]\ntitle: X\n---\nBody";

        // Act
        let (meta, body) = split(source).expect("Should parse");

        // Assert
        assert_eq!(meta.title.as_deref(), Some("X"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_empty_block_and_bom() {
        // Arrange
        let source = "\u{feff}---\n---\nBody";

        // Act
        let (meta, body) = split(source).expect("Should parse");

        // Assert
        assert_eq!(meta, FrontMatter::default());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_dots_terminator() {
        // Arrange & Act
        let (meta, body) = split("---\ntitle: Dots\n...\nBody").expect("Should parse");

        // Assert
        assert_eq!(meta.title.as_deref(), Some("Dots"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_unterminated_block_is_error() {
        // Arrange & Act
        let result = split("---\ntitle: Open\n# Body");

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        // Arrange & Act
        let result = split("---\ntitle: [unclosed\n---\nBody");

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_non_mapping_is_error() {
        // Arrange & Act
        let result = split("---\n- just\n- a list\n---\nBody");

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_horizontal_rule_later_is_not_front_matter() {
        // Arrange
        let source = "Intro\n\n---\n\nMore";

        // Act
        let (meta, body) = split(source).expect("Should parse");

        // Assert
        assert_eq!(meta, FrontMatter::default());
        assert_eq!(body, source);
    }
}
