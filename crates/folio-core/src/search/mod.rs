//! In-memory free-text search over portfolio content.
//!
//! This module provides:
//! - Query normalization
//! - Relevance scoring per entity
//! - Cross-collection ranking with a global limit
//! - Grouping of ranked results with a per-group limit
//! - Category and text filtering for the project catalog
//!
//! Everything here is synchronous and read-only over a
//! [`ContentStore`](crate::content::ContentStore).

mod aggregator;
mod grouped;
mod project_filter;
mod query;
mod scorer;
mod types;

pub use aggregator::search_all;
pub use grouped::{grouped_search_results, GroupedSearchResults};
pub use project_filter::{filter_projects, matches_text, ProjectCategory};
pub use query::SearchQuery;
pub use scorer::{score, score_fields, ScoringFields, Searchable};
pub use types::{SearchResult, SearchResultType};
