//! Integration tests for the folio binary.
//!
//! These run the built binary and check both the text and the JSON output.

use serde_json::Value;
use std::process::{Command, Output};
use tempfile::TempDir;

fn folio(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .env_remove("FOLIO_CONTENT")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run folio")
}

fn json_stdout(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_search_json_is_ranked() {
    let output = folio(&["search", "c++", "--json"]);
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["success"], true);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["title"], "C++ CNN");
    assert_eq!(results[0]["relevance"], 18);
    assert_eq!(results[0]["type"], "project");
}

#[test]
fn test_search_limit_is_global() {
    let output = folio(&["search", "python", "--limit", "1", "--json"]);
    let json = json_stdout(&output);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "pl-Python");
}

#[test]
fn test_grouped_search_text() {
    let output = folio(&["search", "react", "--grouped", "--limit", "1"]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("Projects\n"));
    assert!(text.contains("Skills\n"));
}

#[test]
fn test_blank_search_prints_no_results() {
    let output = folio(&["search", "   "]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text, "No results for \"\"\n");
}

#[test]
fn test_unknown_project_fails() {
    let output = folio(&["project", "404", "--json"]);
    assert!(!output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("Project not found: 404"));
}

#[test]
fn test_projects_filter() {
    let output = folio(&["projects", "--category", "parallel", "--json"]);
    let json = json_stdout(&output);
    let projects = json["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "Parallelized Phase Vocoder");

    let output = folio(&["projects", "--category", "desktop"]);
    assert!(!output.status.success());
}

#[test]
fn test_content_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("content.json");
    std::fs::write(
        &path,
        r#"{"skills": {"testing": ["Proptest"], "devOpsTools": ["Nix"]}}"#,
    )
    .unwrap();

    let output = folio(&["skills", "--json", "--content", path.to_str().unwrap()]);
    assert!(output.status.success());
    let json = json_stdout(&output);
    let ids: Vec<&str> = json["skills"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["do-Nix", "test-Proptest"]);
}

#[test]
fn test_missing_content_file_fails() {
    let output = folio(&["skills", "--content", "/nonexistent/content.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("File not found"));
}

#[test]
fn test_json_mode_logs_json_lines() {
    let output = folio(&["search", "react", "--json", "--debug"]);
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let record: Value = serde_json::from_str(line).expect("log line should be JSON");
        assert!(record["level"].is_string());
    }
}

#[test]
fn test_rust_log_overrides_debug_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(["search", "react", "--debug"])
        .env_remove("FOLIO_CONTENT")
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to run folio");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
