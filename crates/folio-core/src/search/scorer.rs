//! Relevance scoring for projects, experience and education.
//!
//! Every signal that fires adds its weight; there is no early return. Fields
//! an entity does not have contribute nothing. Skills are not scored here,
//! they get a flat relevance in the aggregator.

use super::query::contains_ignore_case;
use super::types::{SearchResult, SearchResultType};
use crate::config::{RouteConfig, SearchConfig};
use crate::models::{Education, Experience, Project};

/// The text of an entity that takes part in scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringFields<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub position: Option<&'a str>,
    pub degree: Option<&'a str>,
    pub tags: &'a [String],
}

/// An entity that can be scored and turned into a [`SearchResult`].
pub trait Searchable {
    const RESULT_TYPE: SearchResultType;

    fn scoring_fields(&self) -> ScoringFields<'_>;

    fn to_search_result(&self, relevance: u32) -> SearchResult;
}

/// Score an entity against a raw query. Zero means no match.
///
/// The query is compared case-insensitively as a literal substring. Callers
/// are expected to reject blank queries before scoring.
pub fn score<T: Searchable>(entity: &T, query: &str) -> u32 {
    score_fields(&entity.scoring_fields(), &query.to_lowercase())
}

/// Score fields against a query that is already lower-cased.
pub fn score_fields(fields: &ScoringFields<'_>, lowered_query: &str) -> u32 {
    let mut score: u32 = 0;

    if let Some(title) = fields.title {
        if contains_ignore_case(title, lowered_query) {
            score = score.saturating_add(SearchConfig::TITLE_MATCH);
            if title.to_lowercase() == lowered_query {
                score = score.saturating_add(SearchConfig::EXACT_TITLE_BONUS);
            }
        }
    }

    if fields
        .description
        .is_some_and(|description| contains_ignore_case(description, lowered_query))
    {
        score = score.saturating_add(SearchConfig::DESCRIPTION_MATCH);
    }

    if fields
        .position
        .is_some_and(|position| contains_ignore_case(position, lowered_query))
    {
        score = score.saturating_add(SearchConfig::POSITION_MATCH);
    }

    if fields
        .degree
        .is_some_and(|degree| contains_ignore_case(degree, lowered_query))
    {
        score = score.saturating_add(SearchConfig::DEGREE_MATCH);
    }

    let matching_tags = fields
        .tags
        .iter()
        .filter(|tag| contains_ignore_case(tag, lowered_query))
        .count();

    score.saturating_add(tag_score(matching_tags))
}

/// Weight of `matching` tags. Tag lists come from content files and are
/// unbounded, so this saturates instead of wrapping.
fn tag_score(matching: usize) -> u32 {
    u32::try_from(matching)
        .unwrap_or(u32::MAX)
        .saturating_mul(SearchConfig::TAG_MATCH)
}

impl Searchable for Project {
    const RESULT_TYPE: SearchResultType = SearchResultType::Project;

    fn scoring_fields(&self) -> ScoringFields<'_> {
        ScoringFields {
            title: Some(&self.title),
            description: Some(&self.description),
            tags: &self.tags,
            ..Default::default()
        }
    }

    fn to_search_result(&self, relevance: u32) -> SearchResult {
        SearchResult {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            result_type: Self::RESULT_TYPE,
            url: self.link.clone(),
            relevance,
            image: Some(self.image.clone()),
            tags: Some(self.tags.clone()),
        }
    }
}

impl Searchable for Experience {
    const RESULT_TYPE: SearchResultType = SearchResultType::Experience;

    fn scoring_fields(&self) -> ScoringFields<'_> {
        ScoringFields {
            title: Some(&self.title),
            description: Some(&self.description),
            position: Some(&self.position),
            tags: &self.tags,
            ..Default::default()
        }
    }

    fn to_search_result(&self, relevance: u32) -> SearchResult {
        SearchResult {
            id: self.id.clone(),
            title: self.title.clone(),
            description: format!("{} - {}", self.position, self.description),
            result_type: Self::RESULT_TYPE,
            url: RouteConfig::EXPERIENCE.to_string(),
            relevance,
            image: None,
            tags: Some(self.tags.clone()),
        }
    }
}

impl Searchable for Education {
    const RESULT_TYPE: SearchResultType = SearchResultType::Education;

    fn scoring_fields(&self) -> ScoringFields<'_> {
        ScoringFields {
            title: Some(&self.title),
            description: Some(&self.description),
            degree: Some(&self.degree),
            ..Default::default()
        }
    }

    fn to_search_result(&self, relevance: u32) -> SearchResult {
        SearchResult {
            id: self.id.clone(),
            title: self.title.clone(),
            description: format!("{} - {}", self.degree, self.description),
            result_type: Self::RESULT_TYPE,
            url: RouteConfig::EDUCATION.to_string(),
            relevance,
            image: None,
            tags: None,
        }
    }
}
