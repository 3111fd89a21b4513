//! Immutable content store.

use super::defaults::default_document;
use super::loader::{load_document, parse_document, ContentDocument};
use crate::error::Result;
use crate::models::{Education, Experience, Project, Skill, SkillTaxonomy};
use std::path::Path;

/// Read-only portfolio content.
///
/// Built once and never mutated afterwards; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    projects: Vec<Project>,
    experiences: Vec<Experience>,
    education: Vec<Education>,
    skills: SkillTaxonomy,
}

impl ContentStore {
    /// Build a store from a document, validating it first.
    pub fn from_document(document: ContentDocument) -> Result<Self> {
        document.validate()?;
        Ok(Self::from_validated(document))
    }

    fn from_validated(document: ContentDocument) -> Self {
        Self {
            projects: document.projects,
            experiences: document.experiences,
            education: document.education,
            skills: document.skills,
        }
    }

    /// The embedded default portfolio.
    pub fn default_portfolio() -> Self {
        Self::from_validated(default_document())
    }

    /// Parse a store from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        parse_document(json).map(Self::from_validated)
    }

    /// Load a store from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        load_document(path).map(Self::from_validated)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn skill_taxonomy(&self) -> &SkillTaxonomy {
        &self.skills
    }

    /// Derived skills in category order.
    pub fn skills(&self) -> Vec<Skill> {
        self.skills.skills()
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Total number of searchable entities, counting each skill once per category.
    pub fn entity_count(&self) -> usize {
        self.projects.len() + self.experiences.len() + self.education.len() + self.skills.len()
    }

    /// Copy the content back into its document form.
    pub fn to_document(&self) -> ContentDocument {
        ContentDocument {
            projects: self.projects.clone(),
            experiences: self.experiences.clone(),
            education: self.education.clone(),
            skills: self.skills.clone(),
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::default_portfolio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FolioError;

    #[test]
    fn test_default_portfolio_lookup() {
        let store = ContentStore::default_portfolio();
        assert_eq!(store.project("2").map(|p| p.title.as_str()), Some("EndyBot"));
        assert!(store.project("missing").is_none());
        assert_eq!(store.entity_count(), 5 + 2 + 1 + 42);
    }

    #[test]
    fn test_from_document_validates() {
        let mut document = default_document();
        document.projects[1].id = document.projects[0].id.clone();
        let err = ContentStore::from_document(document).unwrap_err();
        assert!(matches!(err, FolioError::Validation { .. }));
    }

    #[test]
    fn test_json_roundtrip_preserves_content() {
        let store = ContentStore::default_portfolio();
        let json = serde_json::to_string(&store.to_document()).unwrap();
        let reloaded = ContentStore::from_json_str(&json).unwrap();
        assert_eq!(store, reloaded);
    }
}
