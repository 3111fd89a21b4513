//! Results partitioned by entity type for sectioned display.

use super::aggregator::{effective_limit, search_all};
use super::types::{SearchResult, SearchResultType};
use crate::content::ContentStore;
use serde::{Deserialize, Serialize};

/// Ranked results split into one list per entity type.
///
/// Each list keeps the relevance order of the ungrouped ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedSearchResults {
    pub projects: Vec<SearchResult>,
    pub skills: Vec<SearchResult>,
    pub experience: Vec<SearchResult>,
    pub education: Vec<SearchResult>,
}

impl GroupedSearchResults {
    /// Partition an already ranked list, capping each group at `limit`.
    ///
    /// The cap applies per group, so up to four times `limit` results can
    /// come back. `None` or `Some(0)` keeps every result.
    pub fn from_ranked(results: Vec<SearchResult>, limit: Option<usize>) -> Self {
        let limit = effective_limit(limit);
        let mut grouped = Self::default();

        for result in results {
            let group = grouped.group_mut(result.result_type);
            if limit.map_or(true, |limit| group.len() < limit) {
                group.push(result);
            }
        }

        grouped
    }

    pub fn group(&self, result_type: SearchResultType) -> &[SearchResult] {
        match result_type {
            SearchResultType::Project => &self.projects,
            SearchResultType::Skill => &self.skills,
            SearchResultType::Experience => &self.experience,
            SearchResultType::Education => &self.education,
        }
    }

    fn group_mut(&mut self, result_type: SearchResultType) -> &mut Vec<SearchResult> {
        match result_type {
            SearchResultType::Project => &mut self.projects,
            SearchResultType::Skill => &mut self.skills,
            SearchResultType::Experience => &mut self.experience,
            SearchResultType::Education => &mut self.education,
        }
    }

    /// Groups in display order, skipping empty ones.
    pub fn sections(&self) -> impl Iterator<Item = (SearchResultType, &[SearchResult])> + '_ {
        SearchResultType::ALL
            .into_iter()
            .map(move |result_type| (result_type, self.group(result_type)))
            .filter(|(_, results)| !results.is_empty())
    }

    pub fn total_len(&self) -> usize {
        self.projects.len() + self.skills.len() + self.experience.len() + self.education.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}

/// Search every collection and group the ranked matches by type.
///
/// Ranking runs once without a global limit; `limit` then caps each group
/// independently.
pub fn grouped_search_results(
    store: &ContentStore,
    query: &str,
    limit: Option<usize>,
) -> GroupedSearchResults {
    GroupedSearchResults::from_ranked(search_all(store, query, None), limit)
}
