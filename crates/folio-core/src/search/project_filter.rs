//! Category and text filtering for the project catalog.
//!
//! Unlike ranked search this keeps declaration order and does not trim the
//! query.

use crate::models::Project;
use serde::{Deserialize, Serialize};

/// Catalog category a project can be filed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    All,
    Web,
    Mobile,
    Embedded,
    Parallel,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::All,
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Embedded,
        ProjectCategory::Parallel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::All => "all",
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Embedded => "embedded",
            ProjectCategory::Parallel => "parallel",
        }
    }

    /// Tags that file a project under this category. Empty for `All`.
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            ProjectCategory::All => &[],
            ProjectCategory::Web => &["React", "Node.js", "TypeScript", "JavaScript", "Web"],
            ProjectCategory::Mobile => &["React Native", "Mobile", "iOS", "Android"],
            ProjectCategory::Embedded => &["Embedded Systems", "Arduino", "IoT", "Hardware"],
            ProjectCategory::Parallel => &[
                "Parallel Computing",
                "MPI",
                "OpenMP",
                "CUDA",
                "Distributed Systems",
            ],
        }
    }

    /// Whether the project carries one of this category's tags (exact, case-sensitive).
    pub fn contains(&self, project: &Project) -> bool {
        match self {
            ProjectCategory::All => true,
            _ => project
                .tags
                .iter()
                .any(|tag| self.tags().contains(&tag.as_str())),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        ProjectCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the project's title, description or any tag contains `query`,
/// ignoring case. An empty query matches everything.
pub fn matches_text(project: &Project, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    project.title.to_lowercase().contains(&query)
        || project.description.to_lowercase().contains(&query)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
}

/// Projects in `category` matching `query`, in declaration order.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    category: ProjectCategory,
    query: &str,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| category.contains(project) && matches_text(project, query))
        .collect()
}
