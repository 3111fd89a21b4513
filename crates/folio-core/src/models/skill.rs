//! Skill taxonomy types.
//!
//! Skills are declared as flat name lists per category. Individual [`Skill`]
//! values are derived from those lists on demand; their ids are a pure
//! function of category and name.

use serde::{Deserialize, Serialize};

/// Category of a skill, in the order skills are listed and searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
    ProgrammingLanguages,
    Frameworks,
    CloudPlatforms,
    DevOpsTools,
    Databases,
    ParallelComputing,
    Testing,
}

impl SkillCategory {
    /// Every category, in scan order.
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::ProgrammingLanguages,
        SkillCategory::Frameworks,
        SkillCategory::CloudPlatforms,
        SkillCategory::DevOpsTools,
        SkillCategory::Databases,
        SkillCategory::ParallelComputing,
        SkillCategory::Testing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "programmingLanguages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::CloudPlatforms => "cloudPlatforms",
            SkillCategory::DevOpsTools => "devOpsTools",
            SkillCategory::Databases => "databases",
            SkillCategory::ParallelComputing => "parallelComputing",
            SkillCategory::Testing => "testing",
        }
    }

    /// Prefix used when deriving skill ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "pl",
            SkillCategory::Frameworks => "fw",
            SkillCategory::CloudPlatforms => "cp",
            SkillCategory::DevOpsTools => "do",
            SkillCategory::Databases => "db",
            SkillCategory::ParallelComputing => "pc",
            SkillCategory::Testing => "test",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "Programming Languages",
            SkillCategory::Frameworks => "Frameworks & Libraries",
            SkillCategory::CloudPlatforms => "Cloud Platforms",
            SkillCategory::DevOpsTools => "DevOps Tools",
            SkillCategory::Databases => "Databases",
            SkillCategory::ParallelComputing => "Parallel Computing",
            SkillCategory::Testing => "Testing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        SkillCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single skill derived from the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(category: SkillCategory, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: skill_id(category, &name),
            name,
            category,
        }
    }
}

/// Derive the id of a skill: `<category-prefix>-<name>`.
pub fn skill_id(category: SkillCategory, name: &str) -> String {
    format!("{}-{}", category.id_prefix(), name)
}

/// Flat skill lists, one per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTaxonomy {
    #[serde(default)]
    pub programming_languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub cloud_platforms: Vec<String>,
    #[serde(default)]
    pub dev_ops_tools: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub parallel_computing: Vec<String>,
    #[serde(default)]
    pub testing: Vec<String>,
}

impl SkillTaxonomy {
    /// Names declared under one category.
    pub fn names(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::ProgrammingLanguages => &self.programming_languages,
            SkillCategory::Frameworks => &self.frameworks,
            SkillCategory::CloudPlatforms => &self.cloud_platforms,
            SkillCategory::DevOpsTools => &self.dev_ops_tools,
            SkillCategory::Databases => &self.databases,
            SkillCategory::ParallelComputing => &self.parallel_computing,
            SkillCategory::Testing => &self.testing,
        }
    }

    /// Every `(category, name)` pair in scan order, without allocating.
    pub fn entries(&self) -> impl Iterator<Item = (SkillCategory, &str)> + '_ {
        SkillCategory::ALL.into_iter().flat_map(move |category| {
            self.names(category)
                .iter()
                .map(move |name| (category, name.as_str()))
        })
    }

    /// Derive every skill in scan order.
    pub fn skills(&self) -> Vec<Skill> {
        self.entries()
            .map(|(category, name)| Skill::new(category, name))
            .collect()
    }

    pub fn len(&self) -> usize {
        SkillCategory::ALL
            .iter()
            .map(|category| self.names(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
