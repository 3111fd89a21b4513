//! Plain-text rendering.

use std::fmt::Write;

use folio_core::config::UiConfig;
use folio_core::{GroupedSearchResults, Project, SearchResult, Skill, SkillCategory};

fn tag_line(tags: &[String]) -> String {
    format!("[{}]", tags.join(", "))
}

fn push_result(out: &mut String, result: &SearchResult) {
    let _ = writeln!(out, "  {}  ({})", result.title, result.relevance);
    let _ = writeln!(out, "    {}", result.description);
    let tags = result.tag_preview(UiConfig::TAG_PREVIEW_COUNT);
    if !tags.is_empty() {
        let _ = writeln!(out, "    {}", tag_line(tags));
    }
    let _ = writeln!(out, "    -> {}", result.url);
}

/// Results in per-type sections, skipping empty sections.
pub fn grouped(query: &str, results: &GroupedSearchResults) -> String {
    let mut out = String::new();
    if results.is_empty() {
        let _ = writeln!(out, "No results for \"{}\"", query.trim());
        return out;
    }

    for (result_type, section) in results.sections() {
        let _ = writeln!(out, "{}", result_type.section_title());
        for result in section {
            push_result(&mut out, result);
        }
        out.push('\n');
    }
    out
}

pub fn project_detail(project: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", project.title);
    let _ = writeln!(out, "{}", project.long_description());
    if !project.tags.is_empty() {
        let _ = writeln!(out, "{}", tag_line(&project.tags));
    }
    let _ = writeln!(out, "page:   {}", project.link);
    if let Some(github) = project.github_url() {
        let _ = writeln!(out, "github: {}", github);
    }
    if let Some(demo) = &project.demo_url {
        let _ = writeln!(out, "demo:   {}", demo);
    }
    out
}

pub fn project_list(projects: &[&Project]) -> String {
    let mut out = String::new();
    if projects.is_empty() {
        out.push_str("No matching projects\n");
        return out;
    }
    for project in projects {
        let _ = writeln!(out, "{:>3}  {} - {}", project.id, project.title, project.description);
    }
    out
}

pub fn skills(skills: &[Skill]) -> String {
    let mut out = String::new();
    for category in SkillCategory::ALL {
        let names: Vec<&str> = skills
            .iter()
            .filter(|skill| skill.category == category)
            .map(|skill| skill.name.as_str())
            .collect();
        if !names.is_empty() {
            let _ = writeln!(out, "{}: {}", category.label(), names.join(", "));
        }
    }
    out
}
