//! Integration tests for resume import

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{folio_cmd, init_workspace, new_draft, stdout_of};

const RESUMES: &str = r#"{"resumes": [
    {"id": 7, "created_at": "2025-02-01T00:00:00Z", "structured_data": {
        "name": "Grace Hopper",
        "title": "Rear Admiral",
        "experience": [{"role": "Programmer", "company": "Harvard", "years": "1944-1949"}],
        "projects": [{"title": "COBOL", "technologies": ["FLOW-MATIC"]}],
        "skills": ["Compilers", "N/A"]
    }}
]}"#;

fn stored_data(dir: &std::path::Path) -> serde_json::Value {
    let raw = fs::read_to_string(dir.join(".coverfolio/portfolios.json")).unwrap();
    let drafts: serde_json::Value = serde_json::from_str(&raw).unwrap();
    drafts[0]["data"].clone()
}

#[test]
fn test_new_from_resume() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let resumes = temp.path().join("resumes.json");
    fs::write(&resumes, RESUMES).unwrap();

    new_draft(temp.path(), &["--from-resume", resumes.to_str().unwrap()]);

    let data = stored_data(temp.path());
    assert_eq!(data["about"]["name"], "Grace Hopper");
    assert_eq!(data["about"]["headline"], "Rear Admiral");
    assert_eq!(data["experience"][0]["start"], "1944");
    assert_eq!(data["experience"][0]["end"], "1949");
    assert_eq!(data["projects"][0]["tech"], "FLOW-MATIC");
    assert_eq!(data["skills"]["items"], serde_json::json!(["Compilers"]));
}

#[test]
fn test_import_respects_existing_content() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let resumes = temp.path().join("resumes.json");
    fs::write(&resumes, RESUMES).unwrap();
    let id = new_draft(temp.path(), &[]);
    stdout_of(temp.path(), &["set", &id, "about.name", "Hand Typed"]);

    folio_cmd()
        .current_dir(temp.path())
        .args(["import", &id, resumes.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("--overwrite"));
    assert_eq!(stored_data(temp.path())["about"]["name"], "Hand Typed");

    stdout_of(
        temp.path(),
        &["import", &id, resumes.to_str().unwrap(), "--overwrite"],
    );
    assert_eq!(stored_data(temp.path())["about"]["name"], "Grace Hopper");
}

#[test]
fn test_import_bad_listing() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let resumes = temp.path().join("resumes.json");
    fs::write(&resumes, "[]").unwrap();
    let id = new_draft(temp.path(), &[]);

    folio_cmd()
        .current_dir(temp.path())
        .args(["import", &id, resumes.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resume import error"));
}
