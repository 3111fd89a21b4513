//! Project showcase types.

use serde::{Deserialize, Serialize};

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// In-site route to the project page.
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

impl Project {
    /// Repository URL, treating an empty string as absent.
    pub fn github_url(&self) -> Option<&str> {
        self.github.as_deref().filter(|url| !url.is_empty())
    }

    /// Long-form description, falling back to the short one.
    pub fn long_description(&self) -> &str {
        self.detailed_description
            .as_deref()
            .unwrap_or(&self.description)
    }
}
