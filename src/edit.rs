//! Source-control links for content files.

use crate::error::{Result, WikiError};

/// Location of the wiki's content inside a hosted repository.
///
/// Produces GitHub style URLs: `<base>/edit/<branch>/<prefix>/<path>` and
/// `<base>/commits/<branch>/<prefix>/<path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditLinks {
    base: String,
    branch: String,
    prefix: Option<String>,
}

impl EditLinks {
    /// Creates edit links for a repository URL.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Config`] if the URL is not http(s) or the branch is empty
    pub fn new(repo_url: &str, branch: &str, prefix: Option<&str>) -> Result<Self> {
        let base = repo_url.trim().trim_end_matches('/');
        let has_host = base
            .strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(WikiError::Config(format!(
                "repository URL must start with http:// or https://: {repo_url}"
            )));
        }

        let branch = branch.trim();
        if branch.is_empty() {
            return Err(WikiError::Config("branch must not be empty".to_string()));
        }

        let prefix = prefix
            .map(|p| p.trim_matches('/'))
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(Self {
            base: base.to_string(),
            branch: branch.to_string(),
            prefix,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of the editor for a content path such as `foo/bar.md`.
    pub fn edit_url(&self, path: &str) -> String {
        self.url("edit", path)
    }

    /// URL of the commit history for a content path.
    pub fn history_url(&self, path: &str) -> String {
        self.url("commits", path)
    }

    fn url(&self, action: &str, path: &str) -> String {
        let path = path.trim_start_matches('/');
        match &self.prefix {
            Some(prefix) => format!("{}/{action}/{}/{prefix}/{path}", self.base, self.branch),
            None => format!("{}/{action}/{}/{path}", self.base, self.branch),
        }
    }
}

/// Edit URL for a content path, or `None` when no repository is configured.
pub fn github_edit_url(links: Option<&EditLinks>, path: &str) -> Option<String> {
    links.map(|links| links.edit_url(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_url_suffix_and_prefix() {
        // Arrange
        let links = EditLinks::new("https://github.com/acme/wiki", "main", None)
            .expect("valid configuration");

        // Act
        let url = github_edit_url(Some(&links), "foo/bar.md").expect("configured");

        // Assert
        assert!(url.starts_with("https://github.com/acme/wiki"));
        assert!(url.ends_with("foo/bar.md"));
        assert_eq!(url, "https://github.com/acme/wiki/edit/main/foo/bar.md");
    }

    #[test]
    fn test_edit_url_with_content_prefix() {
        // Arrange
        let links = EditLinks::new("https://github.com/acme/site/", "dev", Some("/content/"))
            .expect("valid configuration");

        // Act
        let url = links.edit_url("faq.md");

        // Assert
        assert_eq!(url, "https://github.com/acme/site/edit/dev/content/faq.md");
    }

    #[test]
    fn test_history_url() {
        // Arrange
        let links = EditLinks::new("https://github.com/acme/wiki", "main", Some("docs"))
            .expect("valid configuration");

        // Act
        let url = links.history_url("guide/setup.md");

        // Assert
        assert_eq!(
            url,
            "https://github.com/acme/wiki/commits/main/docs/guide/setup.md"
        );
    }

    #[test]
    fn test_missing_configuration_yields_none() {
        // Arrange & Act
        let url = github_edit_url(None, "foo/bar.md");

        // Assert
        assert_eq!(url, None);
    }

    #[test]
    fn test_malformed_url_rejected() {
        // Arrange & Act
        let result = EditLinks::new("github.com/acme/wiki", "main", None);

        // Assert
        assert!(matches!(result, Err(WikiError::Config(_))));
        assert!(EditLinks::new("https://", "main", None).is_err());
    }

    #[test]
    fn test_empty_branch_rejected() {
        // Arrange & Act
        let result = EditLinks::new("https://github.com/acme/wiki", "  ", None);

        // Assert
        assert!(matches!(result, Err(WikiError::Config(_))));
    }
}
