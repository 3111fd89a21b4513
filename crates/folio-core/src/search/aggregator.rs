//! Cross-collection search: scan, score, rank, truncate.

use super::query::SearchQuery;
use super::scorer::{score_fields, Searchable};
use super::types::{SearchResult, SearchResultType};
use crate::config::{RouteConfig, SearchConfig};
use crate::content::ContentStore;
use crate::models::{SkillCategory, SkillTaxonomy};
use tracing::debug;

/// Treat a zero limit as "no limit".
pub(crate) fn effective_limit(limit: Option<usize>) -> Option<usize> {
    limit.filter(|&limit| limit > 0)
}

/// Search every collection in the store and rank the matches.
///
/// Collections are scanned in a fixed order (projects, skills, experience,
/// education) and the matches are stably sorted by relevance, highest first,
/// so ties keep scan order. `limit` caps the total number of results; `None`
/// or `Some(0)` returns everything. Blank queries return an empty list
/// without touching the store.
pub fn search_all(store: &ContentStore, query: &str, limit: Option<usize>) -> Vec<SearchResult> {
    let Some(query) = SearchQuery::parse(query) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    collect_scored(store.projects(), &query, &mut results);
    collect_skills(store.skill_taxonomy(), &query, &mut results);
    collect_scored(store.experiences(), &query, &mut results);
    collect_scored(store.education(), &query, &mut results);

    let matched = results.len();

    // Vec::sort_by is stable.
    results.sort_by(|a, b| b.relevance.cmp(&a.relevance));

    if let Some(limit) = effective_limit(limit) {
        results.truncate(limit);
    }

    debug!(
        "Search {:?}: {} of {} entities matched, returning {}",
        query.as_str(),
        matched,
        store.entity_count(),
        results.len()
    );

    results
}

fn collect_scored<T: Searchable>(items: &[T], query: &SearchQuery, results: &mut Vec<SearchResult>) {
    for item in items {
        let relevance = score_fields(&item.scoring_fields(), query.lowered());
        if relevance > 0 {
            results.push(item.to_search_result(relevance));
        }
    }
}

fn collect_skills(taxonomy: &SkillTaxonomy, query: &SearchQuery, results: &mut Vec<SearchResult>) {
    for (category, name) in taxonomy.entries() {
        if query.matches(name) {
            results.push(skill_result(category, name));
        }
    }
}

fn skill_result(category: SkillCategory, name: &str) -> SearchResult {
    SearchResult {
        id: crate::models::skill_id(category, name),
        title: name.to_string(),
        description: format!("Skill in {}", category.label()),
        result_type: SearchResultType::Skill,
        url: RouteConfig::SKILLS.to_string(),
        relevance: SearchConfig::SKILL_BASE_RELEVANCE,
        image: None,
        tags: Some(vec![category.label().to_string()]),
    }
}
