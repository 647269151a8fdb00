//! Best-effort mapping from parsed resumes to portfolio data
//!
//! Resumes come from an external parser whose `structured_data` is free-form:
//! keys go missing, get renamed, or hold `"N/A"`. Every lookup here walks a
//! fallback chain and yields an empty value rather than failing.

use serde_json::{json, Map, Value};

/// Trim a value to a string; `N/A` and non-strings become empty
fn clean(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str) {
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case("n/a") {
                String::new()
            } else {
                trimmed.to_string()
            }
        }
        None => String::new(),
    }
}

/// First non-empty cleaned string among `keys`
fn first_str(obj: &Value, keys: &[&str]) -> String {
    keys.iter()
        .map(|k| clean(obj.get(k)))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

/// First non-empty array among `keys`
fn first_array(obj: &Value, keys: &[&str]) -> Vec<Value> {
    keys.iter()
        .filter_map(|k| obj.get(k).and_then(Value::as_array))
        .find(|items| !items.is_empty())
        .cloned()
        .unwrap_or_default()
}

fn map_experience(job: &Value) -> Value {
    let years = first_str(job, &["years", "dates", "date"]);
    let (start, end) = if years.contains('-') {
        let mut parts = years.split('-');
        (
            parts.next().unwrap_or_default().trim().to_string(),
            parts.next().unwrap_or_default().trim().to_string(),
        )
    } else {
        (String::new(), String::new())
    };

    json!({
        "role": first_str(job, &["role", "title"]),
        "company": first_str(job, &["company", "org", "organization"]),
        "location": first_str(job, &["location"]),
        "start": start,
        "end": end,
        "description": first_str(job, &["role_summary", "description"]),
        "years": years,
    })
}

fn map_project(project: &Value) -> Value {
    let tech = match project.get("technologies").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .map(|t| clean(Some(t)))
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        None => first_str(project, &["tech_stack"]),
    };

    json!({
        "name": first_str(project, &["title", "name"]),
        "description": first_str(project, &["description"]),
        "tech": tech,
        "link": first_str(project, &["link", "github", "demo"]),
    })
}

/// Map a resume's `structured_data` into the data shape drafts are edited in
pub fn map_resume(structured: &Value) -> Value {
    if !structured.is_object() {
        return Value::Object(Map::new());
    }

    let experience: Vec<Value> = first_array(structured, &["experience"])
        .iter()
        .map(map_experience)
        .collect();
    let projects: Vec<Value> = first_array(structured, &["projects"])
        .iter()
        .map(map_project)
        .collect();
    let skills: Vec<String> = first_array(structured, &["skills"])
        .iter()
        .map(|s| clean(Some(s)))
        .filter(|s| !s.is_empty())
        .collect();
    let contact = structured
        .get("contact")
        .filter(|c| c.is_object())
        .cloned()
        .unwrap_or_else(|| json!({}));

    json!({
        "about": {
            "name": first_str(structured, &["name"]),
            "headline": first_str(structured, &["headline", "title"]),
            "summary": first_str(structured, &["summary", "objective"]),
            "links": {
                "github": first_str(structured, &["github"]),
                "linkedin": first_str(structured, &["linkedin"]),
            },
            "location": first_str(structured, &["location"]),
            "website": first_str(structured, &["website"]),
            "email": first_str(structured, &["email"]),
        },
        "experience": experience,
        "projects": projects,
        "skills": { "items": skills },
        "education": first_array(structured, &["education"]),
        "certifications": first_array(structured, &["certifications"]),
        "publications": first_array(structured, &["publications_and_patents", "publications"]),
        "awards": first_array(structured, &["accomplishments_awards", "awards"]),
        "hobbies": first_array(structured, &["hobbies_and_interests", "hobbies"]),
        "contact": contact,
        "sections": {},
        "headings": {},
    })
}

/// Pick the most recently created resume that carries structured data.
///
/// Accepts either a bare array or a `{"resumes": [...]}` listing. Resumes
/// without `created_at` sort as oldest; ties keep the earlier entry.
pub fn latest_resume(listing: &Value) -> Option<&Value> {
    let resumes = match listing {
        Value::Array(items) => items,
        Value::Object(obj) => obj.get("resumes")?.as_array()?,
        _ => return None,
    };

    let mut latest: Option<(&str, &Value)> = None;
    for resume in resumes {
        if !resume.get("structured_data").is_some_and(Value::is_object) {
            continue;
        }
        let created = resume
            .get("created_at")
            .and_then(Value::as_str)
            .unwrap_or("");
        match latest {
            Some((best, _)) if created <= best => {}
            _ => latest = Some((created, resume)),
        }
    }

    latest.map(|(_, resume)| resume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_na_and_whitespace() {
        assert_eq!(clean(Some(&json!("  Ada  "))), "Ada");
        assert_eq!(clean(Some(&json!("n/a"))), "");
        assert_eq!(clean(Some(&json!(" N/A "))), "");
        assert_eq!(clean(Some(&json!(42))), "");
        assert_eq!(clean(None), "");
    }

    #[test]
    fn test_about_fallback_chains() {
        let data = map_resume(&json!({
            "name": "Ada Lovelace",
            "title": "Analyst",
            "objective": "Compute things",
            "github": "ada",
            "email": "N/A"
        }));

        assert_eq!(data["about"]["name"], "Ada Lovelace");
        assert_eq!(data["about"]["headline"], "Analyst");
        assert_eq!(data["about"]["summary"], "Compute things");
        assert_eq!(data["about"]["links"]["github"], "ada");
        assert_eq!(data["about"]["email"], "");
    }

    #[test]
    fn test_experience_years_split() {
        let data = map_resume(&json!({
            "experience": [
                {
                    "title": "Engineer",
                    "org": "Acme",
                    "dates": "2019 - 2021",
                    "role_summary": "Built"
                },
                { "role": "Lead", "company": "Initech", "years": "2022" }
            ]
        }));

        let first = &data["experience"][0];
        assert_eq!(first["role"], "Engineer");
        assert_eq!(first["company"], "Acme");
        assert_eq!(first["start"], "2019");
        assert_eq!(first["end"], "2021");
        assert_eq!(first["description"], "Built");
        assert_eq!(first["years"], "2019 - 2021");

        let second = &data["experience"][1];
        assert_eq!(second["start"], "");
        assert_eq!(second["end"], "");
        assert_eq!(second["years"], "2022");
    }

    #[test]
    fn test_projects_tech_and_links() {
        let data = map_resume(&json!({
            "projects": [
                {
                    "title": "Engine",
                    "technologies": ["Rust", " ", "N/A", "WASM"],
                    "demo": "https://x.dev"
                },
                { "name": "Site", "tech_stack": "Astro" }
            ]
        }));

        assert_eq!(data["projects"][0]["name"], "Engine");
        assert_eq!(data["projects"][0]["tech"], "Rust, WASM");
        assert_eq!(data["projects"][0]["link"], "https://x.dev");
        assert_eq!(data["projects"][1]["name"], "Site");
        assert_eq!(data["projects"][1]["tech"], "Astro");
    }

    #[test]
    fn test_skills_filters_empty() {
        let data = map_resume(&json!({ "skills": ["Rust", "", "n/a", 7, " Go "] }));
        assert_eq!(data["skills"]["items"], json!(["Rust", "Go"]));
    }

    #[test]
    fn test_array_fallback_takes_first_non_empty() {
        let data = map_resume(&json!({
            "publications_and_patents": [],
            "publications": [{ "title": "Notes" }],
            "hobbies_and_interests": ["chess"],
            "hobbies": ["golf"]
        }));

        assert_eq!(data["publications"], json!([{ "title": "Notes" }]));
        assert_eq!(data["hobbies"], json!(["chess"]));
        assert_eq!(data["awards"], json!([]));
        assert_eq!(data["contact"], json!({}));
        assert_eq!(data["sections"], json!({}));
    }

    #[test]
    fn test_map_non_object_is_empty() {
        assert_eq!(map_resume(&json!(null)), json!({}));
    }

    #[test]
    fn test_latest_resume_by_created_at() {
        let listing = json!({ "resumes": [
            { "id": 1, "created_at": "2025-01-01T00:00:00Z", "structured_data": { "name": "old" } },
            { "id": 2, "created_at": "2025-03-01T00:00:00Z", "structured_data": { "name": "new" } },
            { "id": 3, "structured_data": { "name": "undated" } }
        ]});

        let latest = latest_resume(&listing).unwrap();
        assert_eq!(latest["id"], 2);
    }

    #[test]
    fn test_latest_resume_skips_missing_structured_data() {
        let listing = json!([
            { "id": 1, "created_at": "2025-01-01", "structured_data": { "name": "a" } },
            { "id": 2, "created_at": "2025-06-01", "structured_data": null }
        ]);

        assert_eq!(latest_resume(&listing).unwrap()["id"], 1);
        assert!(latest_resume(&json!([])).is_none());
        assert!(latest_resume(&json!("nope")).is_none());
    }

    #[test]
    fn test_latest_resume_tie_keeps_first() {
        let listing = json!([
            { "id": "first", "created_at": "2025-04-01T00:00:00Z", "structured_data": {} },
            { "id": "second", "created_at": "2025-04-01T00:00:00Z", "structured_data": {} }
        ]);

        assert_eq!(latest_resume(&listing).unwrap()["id"], "first");
    }
}
