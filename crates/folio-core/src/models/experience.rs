//! Work history and education types.

use serde::{Deserialize, Serialize};

/// A position held at a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    /// Company name.
    pub title: String,
    pub position: String,
    pub description: String,
    /// Free-form date range, e.g. "March 2020 - March 2022".
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A degree program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    /// Institution name.
    pub title: String,
    pub degree: String,
    pub description: String,
    pub date: String,
}
