//! Result types shared by the search functions and their front ends.

use serde::{Deserialize, Serialize};

/// Kind of entity a search result points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
    Project,
    Skill,
    Experience,
    Education,
}

impl SearchResultType {
    /// Every type, in scan and display order.
    pub const ALL: [SearchResultType; 4] = [
        SearchResultType::Project,
        SearchResultType::Skill,
        SearchResultType::Experience,
        SearchResultType::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchResultType::Project => "project",
            SearchResultType::Skill => "skill",
            SearchResultType::Experience => "experience",
            SearchResultType::Education => "education",
        }
    }

    /// Section heading used when results are grouped.
    pub fn section_title(&self) -> &'static str {
        match self {
            SearchResultType::Project => "Projects",
            SearchResultType::Skill => "Skills",
            SearchResultType::Experience => "Experience",
            SearchResultType::Education => "Education",
        }
    }
}

impl std::fmt::Display for SearchResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One matched entity, normalized for display.
///
/// Created fresh for every query. `relevance` is always positive for results
/// returned by [`search_all`](super::search_all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Unique within `result_type` only.
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub result_type: SearchResultType,
    pub url: String,
    pub relevance: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SearchResult {
    /// Key that is unique across every result type: `<type>-<id>`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.result_type, self.id)
    }

    /// At most `count` leading tags.
    pub fn tag_preview(&self, count: usize) -> &[String] {
        match &self.tags {
            Some(tags) => &tags[..tags.len().min(count)],
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> SearchResult {
        SearchResult {
            id: "exp2".into(),
            title: "RideStream".into(),
            description: "Full-Stack Software Engineer - mobile".into(),
            result_type: SearchResultType::Experience,
            url: "/about#experience".into(),
            relevance: 8,
            image: None,
            tags: Some(vec!["React Native".into(), "AWS S3".into(), "DynamoDB".into(), "Ad Tech".into()]),
        }
    }

    #[test]
    fn test_key_combines_type_and_id() {
        assert_eq!(result().key(), "experience-exp2");
    }

    #[test]
    fn test_tag_preview() {
        let result = result();
        assert_eq!(result.tag_preview(3).len(), 3);
        assert_eq!(result.tag_preview(10).len(), 4);

        let untagged = SearchResult { tags: None, ..result };
        assert!(untagged.tag_preview(3).is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(result()).unwrap();
        assert_eq!(value["type"], "experience");
        assert_eq!(value["relevance"], 8);
        assert!(value.get("image").is_none());
        assert!(value.get("resultType").is_none());
    }
}
