//! JSON content documents.

use crate::error::{FolioError, Result};
use crate::models::{Education, Experience, Project, SkillCategory, SkillTaxonomy};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// On-disk shape of portfolio content.
///
/// Every collection is optional and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: SkillTaxonomy,
}

impl ContentDocument {
    /// Check id and name constraints.
    ///
    /// Ids must be non-empty and unique within their collection. Uniqueness
    /// across collections is not required. Skill names must be non-blank and
    /// unique within their category.
    pub fn validate(&self) -> Result<()> {
        check_ids("projects", self.projects.iter().map(|p| p.id.as_str()))?;
        check_ids("experiences", self.experiences.iter().map(|e| e.id.as_str()))?;
        check_ids("education", self.education.iter().map(|e| e.id.as_str()))?;

        // Skill ids derive from the name, so names must be unique per category.
        for category in SkillCategory::ALL {
            let mut seen = HashSet::new();
            for (index, name) in self.skills.names(category).iter().enumerate() {
                let field = || format!("skills.{}[{}]", category.as_str(), index);
                if name.trim().is_empty() {
                    return Err(FolioError::validation(field(), "skill name is empty"));
                }
                if !seen.insert(name.as_str()) {
                    return Err(FolioError::validation(
                        field(),
                        format!("duplicate skill \"{}\"", name),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn check_ids<'a>(collection: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if id.is_empty() {
            return Err(FolioError::validation(
                format!("{}[{}].id", collection, index),
                "id is empty",
            ));
        }
        if !seen.insert(id) {
            return Err(FolioError::validation(
                format!("{}[{}].id", collection, index),
                format!("duplicate id \"{}\"", id),
            ));
        }
    }
    Ok(())
}

/// Parse and validate a content document from JSON text.
pub fn parse_document(json: &str) -> Result<ContentDocument> {
    let document: ContentDocument = serde_json::from_str(json)?;
    document.validate()?;
    debug!(
        "Parsed content: {} projects, {} experiences, {} education, {} skills",
        document.projects.len(),
        document.experiences.len(),
        document.education.len(),
        document.skills.len()
    );
    Ok(document)
}

/// Read, parse and validate a content document from a JSON file.
pub fn load_document(path: impl AsRef<Path>) -> Result<ContentDocument> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| FolioError::io_with_path(e, path))?;
    let document = parse_document(&json)?;
    info!("Loaded portfolio content from {}", path.display());
    Ok(document)
}
