//! Search methods on Portfolio.

use crate::search::{self, GroupedSearchResults, SearchResult};
use crate::Portfolio;

impl Portfolio {
    /// Rank every entity against `query`, highest relevance first.
    ///
    /// `limit` caps the total list; `None` or `Some(0)` means no cap. Blank
    /// queries return an empty list.
    pub fn search_all(&self, query: &str, limit: Option<usize>) -> Vec<SearchResult> {
        search::search_all(&self.store, query, limit)
    }

    /// Rank every entity against `query` and split the ranking by type.
    ///
    /// `limit` caps each of the four groups independently.
    pub fn grouped_search_results(&self, query: &str, limit: Option<usize>) -> GroupedSearchResults {
        search::grouped_search_results(&self.store, query, limit)
    }
}
