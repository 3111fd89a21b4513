//! Builder for configuring Portfolio initialization.

use std::path::PathBuf;

use crate::content::ContentStore;
use crate::error::{FolioError, Result};
use crate::Portfolio;

/// Builder for configuring Portfolio initialization.
///
/// Content comes from, in order of preference: an explicit store, a JSON
/// content file, or the embedded default portfolio.
///
/// # Example
///
/// ```rust,no_run
/// use folio_core::Portfolio;
///
/// # fn main() -> folio_core::Result<()> {
/// let portfolio = Portfolio::builder()
///     .content_file("./content.json")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct PortfolioBuilder {
    content_file: Option<PathBuf>,
    content_store: Option<ContentStore>,
}

impl PortfolioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load content from a JSON file instead of the embedded portfolio.
    pub fn content_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_file = Some(path.into());
        self
    }

    /// Like [`content_file`](Self::content_file), but a no-op for `None`.
    pub fn maybe_content_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.content_file = path;
        }
        self
    }

    /// Use an already built store. Takes precedence over a content file.
    pub fn content_store(mut self, store: ContentStore) -> Self {
        self.content_store = Some(store);
        self
    }

    /// Build the Portfolio instance.
    pub fn build(self) -> Result<Portfolio> {
        if let Some(store) = self.content_store {
            if let Some(path) = &self.content_file {
                tracing::warn!(
                    "Ignoring content file {} because a content store was supplied",
                    path.display()
                );
            }
            return Ok(Portfolio::from_store(store));
        }

        let Some(path) = self.content_file else {
            return Ok(Portfolio::new());
        };

        if path.is_dir() {
            return Err(FolioError::Config {
                message: format!("Content path is a directory: {}", path.display()),
            });
        }

        let store = ContentStore::from_json_file(&path)?;
        tracing::info!(
            "Portfolio ready with {} searchable entities",
            store.entity_count()
        );
        Ok(Portfolio::from_store(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentDocument;

    #[test]
    fn test_defaults_to_embedded_content() {
        let portfolio = PortfolioBuilder::new().build().unwrap();
        assert_eq!(portfolio.store(), &ContentStore::default_portfolio());
    }

    #[test]
    fn test_store_takes_precedence() {
        let empty = ContentStore::from_document(ContentDocument::default()).unwrap();
        let portfolio = PortfolioBuilder::new()
            .content_file("/does/not/matter.json")
            .content_store(empty)
            .build()
            .unwrap();
        assert_eq!(portfolio.store().entity_count(), 0);
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = PortfolioBuilder::new()
            .content_file(dir.path())
            .build()
            .unwrap_err();
        assert!(matches!(err, FolioError::Config { .. }));
    }

    #[test]
    fn test_maybe_content_file_none_keeps_default() {
        let portfolio = PortfolioBuilder::new()
            .maybe_content_file(None)
            .build()
            .unwrap();
        assert_eq!(portfolio.projects().len(), 5);
    }
}
