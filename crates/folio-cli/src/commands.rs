//! Subcommands and their dispatch.

use anyhow::{anyhow, Result};
use clap::Subcommand;
use folio_core::config::UiConfig;
use folio_core::{GroupedSearchResults, Portfolio, ProjectCategory};
use serde_json::Value;
use tracing::{info, warn};

use crate::render;
use crate::wrapper::wrap_response;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank projects, skills, experience and education against a query
    Search {
        query: String,

        /// Maximum results; with --grouped, maximum per section (0 = no limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Split results into per-type sections, limiting each section separately
        #[arg(short, long)]
        grouped: bool,
    },

    /// Show one project in full
    Project { id: String },

    /// List projects, optionally filtered by category and text
    Projects {
        /// all, web, mobile, embedded or parallel
        #[arg(short, long, default_value = "all", value_parser = parse_category)]
        category: ProjectCategory,

        /// Case-insensitive text to look for in title, description and tags
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// List the skill taxonomy
    Skills,
}

fn parse_category(s: &str) -> std::result::Result<ProjectCategory, String> {
    ProjectCategory::from_str(s).ok_or_else(|| {
        let names: Vec<&str> = ProjectCategory::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category '{}', expected one of: {}", s, names.join(", "))
    })
}

impl Command {
    /// Key the payload is placed under in the `--json` envelope.
    pub fn response_key(&self) -> &'static str {
        match self {
            Command::Search { .. } => "results",
            Command::Project { .. } => "project",
            Command::Projects { .. } => "projects",
            Command::Skills => "skills",
        }
    }
}

/// Both renderings of a command's result; the caller prints one.
pub struct Output {
    pub text: String,
    pub json: Value,
}

pub fn execute(portfolio: &Portfolio, command: &Command) -> Result<Output> {
    let (text, result) = match command {
        Command::Search {
            query,
            limit,
            grouped,
        } => {
            if query.trim().is_empty() {
                warn!("Blank query, nothing to search");
            }
            if *grouped {
                let grouped = portfolio.grouped_search_results(query, *limit);
                info!("{} grouped results for {:?}", grouped.total_len(), query);
                (render::grouped(query, &grouped), serde_json::to_value(&grouped)?)
            } else {
                let limit = limit.or(Some(UiConfig::DROPDOWN_RESULT_LIMIT));
                let results = portfolio.search_all(query, limit);
                info!("{} results for {:?}", results.len(), query);
                // Sectioned like the site's dropdown, but capped globally
                let sections = GroupedSearchResults::from_ranked(results.clone(), None);
                (render::grouped(query, &sections), serde_json::to_value(&results)?)
            }
        }
        Command::Project { id } => {
            let project = portfolio
                .project(id)
                .map_err(|e| anyhow!(e).context("project lookup failed"))?;
            (render::project_detail(project), serde_json::to_value(project)?)
        }
        Command::Projects { category, query } => {
            let projects = portfolio.filter_projects(*category, query);
            (render::project_list(&projects), serde_json::to_value(&projects)?)
        }
        Command::Skills => {
            let skills = portfolio.skills();
            (render::skills(&skills), serde_json::to_value(&skills)?)
        }
    };

    Ok(Output {
        text,
        json: wrap_response(command.response_key(), result),
    })
}
