//! Centralized configuration for the folio library.
//!
//! This module provides the scoring weights used by search, the navigation
//! targets attached to results, and presentation limits shared with front ends.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "folio";
    pub const CONTENT_ENV_VAR: &'static str = "FOLIO_CONTENT";
}

/// Relevance weights for free-text search.
pub struct SearchConfig;

impl SearchConfig {
    pub const TITLE_MATCH: u32 = 10;
    /// Added on top of `TITLE_MATCH` when the title equals the query.
    pub const EXACT_TITLE_BONUS: u32 = 15;
    pub const DESCRIPTION_MATCH: u32 = 5;
    pub const POSITION_MATCH: u32 = 7;
    pub const DEGREE_MATCH: u32 = 7;
    /// Per matching tag.
    pub const TAG_MATCH: u32 = 8;
    /// Flat relevance for any matching skill.
    pub const SKILL_BASE_RELEVANCE: u32 = 8;
}

/// Navigation targets attached to search results.
pub struct RouteConfig;

impl RouteConfig {
    pub const SKILLS: &'static str = "/skills";
    pub const EXPERIENCE: &'static str = "/about#experience";
    pub const EDUCATION: &'static str = "/about#education";
    pub const PROJECTS: &'static str = "/projects";
}

/// Presentation limits shared by front ends.
pub struct UiConfig;

impl UiConfig {
    /// Rows shown in the search dropdown.
    pub const DROPDOWN_RESULT_LIMIT: usize = 10;
    pub const TAG_PREVIEW_COUNT: usize = 3;
}
