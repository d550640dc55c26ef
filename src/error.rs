//! Error taxonomy for content loading and rendering.

use std::path::PathBuf;

/// Errors raised while indexing or rendering wiki content.
///
/// Every variant aborts the build. There is no per-page recovery: one bad
/// file fails the whole site.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// Content root, a subdirectory or a page file could not be read or written.
    #[error("filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed front matter or markdown that could not be rendered.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Requested content path has no markdown file inside the content root.
    #[error("page not found: {path}")]
    NotFound { path: String },

    /// Configuration value that cannot be used.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl WikiError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }
}

/// Result alias for the content layer.
pub type Result<T> = std::result::Result<T, WikiError>;
