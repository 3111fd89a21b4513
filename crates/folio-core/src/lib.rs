//! Folio Core - Headless content store and search for the folio portfolio site.
//!
//! This crate holds the portfolio content (projects, skills, experience,
//! education) and the relevance-ranked search the site's search box runs on
//! every keystroke. It has no I/O beyond optionally loading content from a
//! JSON file at startup.
//!
//! # Example
//!
//! ```rust
//! use folio_core::Portfolio;
//!
//! let portfolio = Portfolio::new();
//!
//! // Ranked results across every collection, at most 10
//! let results = portfolio.search_all("react", Some(10));
//! assert!(results.len() <= 10);
//!
//! // The same ranking split into sections, at most 3 per section
//! let grouped = portfolio.grouped_search_results("react", Some(3));
//! assert!(grouped.skills.len() <= 3);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod search;

mod api;

// Re-export commonly used types
pub use content::{ContentDocument, ContentStore};
pub use error::{FolioError, Result};
pub use models::{Education, Experience, Project, Skill, SkillCategory, SkillTaxonomy};
pub use search::{GroupedSearchResults, ProjectCategory, SearchResult, SearchResultType};

// Re-export builder from api module
pub use api::PortfolioBuilder;

use std::sync::Arc;

/// Main entry point for portfolio content and search.
///
/// Holds a shared, read-only [`ContentStore`]. Cloning is cheap and every
/// method takes `&self`; nothing here mutates the content.
#[derive(Debug, Clone)]
pub struct Portfolio {
    store: Arc<ContentStore>,
}

impl Portfolio {
    /// Create a portfolio over the embedded default content.
    pub fn new() -> Self {
        Self::from_store(ContentStore::default_portfolio())
    }

    /// Create a portfolio over injected content.
    pub fn from_store(store: ContentStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a builder for Portfolio.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # fn main() -> folio_core::Result<()> {
    /// let portfolio = folio_core::Portfolio::builder()
    ///     .content_file("content.json")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> PortfolioBuilder {
        PortfolioBuilder::new()
    }

    /// The content this portfolio searches.
    pub fn store(&self) -> &ContentStore {
        &self.store
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}
