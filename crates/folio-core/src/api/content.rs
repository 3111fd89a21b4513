//! Content access methods on Portfolio.

use crate::error::{FolioError, Result};
use crate::models::{Education, Experience, Project, Skill};
use crate::search::{self, ProjectCategory};
use crate::Portfolio;

impl Portfolio {
    pub fn projects(&self) -> &[Project] {
        self.store.projects()
    }

    /// Look up a project by id.
    pub fn project(&self, id: &str) -> Result<&Project> {
        self.store
            .project(id)
            .ok_or_else(|| FolioError::ProjectNotFound {
                project_id: id.to_string(),
            })
    }

    pub fn experiences(&self) -> &[Experience] {
        self.store.experiences()
    }

    pub fn education(&self) -> &[Education] {
        self.store.education()
    }

    /// Every skill, derived from the taxonomy in category order.
    pub fn skills(&self) -> Vec<Skill> {
        self.store.skills()
    }

    /// Projects in `category` whose title, description or tags contain `query`.
    pub fn filter_projects(&self, category: ProjectCategory, query: &str) -> Vec<&Project> {
        search::filter_projects(self.store.projects(), category, query)
    }
}
