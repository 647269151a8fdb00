//! Draft editing use cases

use crate::domain::{
    get_template, set_data_path, DraftPatch, FieldType, NewDraft, PortfolioDraft, TemplateSchema,
    Theme,
};
use crate::error::{FolioError, Result};
use crate::infrastructure::{DraftStore, EditorSession};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Title given to drafts created without one
pub const DEFAULT_TITLE: &str = "My Portfolio";

/// Service for creating and editing drafts
pub struct DraftService<S: DraftStore> {
    store: S,
}

impl<S: DraftStore> DraftService<S> {
    pub fn new(store: S) -> Self {
        DraftService { store }
    }

    /// Create a draft from a built-in template.
    /// Without explicit data the draft starts from the template's blank form.
    pub fn create(
        &self,
        title: Option<&str>,
        template_key: &str,
        data: Option<Value>,
    ) -> Result<PortfolioDraft> {
        let template = get_template(template_key)
            .ok_or_else(|| FolioError::UnknownTemplate(template_key.to_string()))?;

        self.store.create(NewDraft {
            title: title.unwrap_or(DEFAULT_TITLE).to_string(),
            template_key: template.key.clone(),
            data: data.unwrap_or_else(|| template.schema.blank_data()),
            theme_overrides: Theme::new(),
        })
    }

    /// Fetch a draft, failing when the id is unknown
    pub fn get(&self, id: &str) -> Result<PortfolioDraft> {
        self.store
            .get(id)?
            .ok_or_else(|| FolioError::DraftNotFound(id.to_string()))
    }

    pub fn list(&self) -> Result<Vec<PortfolioDraft>> {
        self.store.list()
    }

    pub fn rename(&self, id: &str, title: &str) -> Result<PortfolioDraft> {
        self.store.update(id, DraftPatch::new().with_title(title))
    }

    /// Switch a draft to another built-in template. Data is kept as is.
    pub fn change_template(&self, id: &str, template_key: &str) -> Result<PortfolioDraft> {
        if get_template(template_key).is_none() {
            return Err(FolioError::UnknownTemplate(template_key.to_string()));
        }
        self.store
            .update(id, DraftPatch::new().with_template_key(template_key))
    }

    /// Set one value inside the draft's data.
    ///
    /// With `as_json` the raw input is parsed as JSON. Otherwise the value is
    /// shaped by the template field at `path`: chips fields take a comma
    /// separated list, everything else a plain string.
    pub fn set_field(
        &self,
        id: &str,
        path: &str,
        raw: &str,
        as_json: bool,
    ) -> Result<PortfolioDraft> {
        let draft = self.get(id)?;
        let schema = get_template(&draft.template_key).map(|t| &t.schema);
        let value = coerce_value(schema, path, raw, as_json)?;

        let mut data = draft.data;
        set_data_path(&mut data, path, value)?;

        debug!(id, path, "set draft field");
        self.store.update(id, DraftPatch::new().with_data(data))
    }

    /// Current override for a theme variable, if any.
    /// Returns the normalized variable name alongside the value.
    pub fn theme_var(&self, id: &str, var: &str) -> Result<(String, Option<String>)> {
        let var = normalize_theme_var(var)?;
        let value = self.get(id)?.theme_overrides.get(&var).cloned();
        Ok((var, value))
    }

    /// Set or, with `None`, remove one theme override
    pub fn set_theme(&self, id: &str, var: &str, value: Option<&str>) -> Result<PortfolioDraft> {
        let var = normalize_theme_var(var)?;
        let mut theme = self.get(id)?.theme_overrides;

        match value {
            Some(v) => {
                theme.insert(var, v.to_string());
            }
            None => {
                theme.remove(&var);
            }
        }

        self.store
            .update(id, DraftPatch::new().with_theme_overrides(theme))
    }

    /// Let the user edit the draft's data as JSON in an external editor.
    ///
    /// The data is written to `scratch`, the editor runs to completion, and
    /// the file is parsed back. Nothing is stored when the result is not
    /// valid JSON.
    pub fn edit_data(
        &self,
        id: &str,
        editor: &EditorSession,
        scratch: &Path,
    ) -> Result<PortfolioDraft> {
        let draft = self.get(id)?;
        fs::write(scratch, serde_json::to_string_pretty(&draft.data)?)?;

        let edited = editor.edit(scratch).and_then(|_| {
            let contents = fs::read_to_string(scratch)?;
            Ok(serde_json::from_str::<Value>(&contents)?)
        });
        let _ = fs::remove_file(scratch);

        self.store.update(id, DraftPatch::new().with_data(edited?))
    }
}

fn coerce_value(
    schema: Option<&TemplateSchema>,
    path: &str,
    raw: &str,
    as_json: bool,
) -> Result<Value> {
    if as_json {
        return Ok(serde_json::from_str(raw)?);
    }

    let field_type = schema
        .and_then(|s| s.locate(path))
        .map(|f| f.field_type);

    Ok(match field_type {
        Some(FieldType::Chips) => Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::String(item.to_string()))
                .collect(),
        ),
        _ => Value::String(raw.to_string()),
    })
}

/// Theme keys are CSS custom properties; `accent` is accepted for `--accent`
fn normalize_theme_var(var: &str) -> Result<String> {
    let trimmed = var.trim();
    let name = trimmed.trim_start_matches('-');
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(FolioError::Config(format!("Invalid theme variable: '{}'", var)));
    }
    Ok(format!("--{}", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{LocalDraftStore, MemorySlot};
    use serde_json::json;

    fn service() -> DraftService<LocalDraftStore<MemorySlot>> {
        DraftService::new(LocalDraftStore::new(MemorySlot::new()))
    }

    #[test]
    fn test_create_defaults() {
        let service = service();
        let draft = service.create(None, "classic", None).unwrap();

        assert_eq!(draft.title, DEFAULT_TITLE);
        assert_eq!(draft.template_key, "classic");
        assert_eq!(draft.data["skills"]["items"], json!([]));
        assert!(draft.theme_overrides.is_empty());
    }

    #[test]
    fn test_create_unknown_template() {
        let service = service();
        let err = service.create(Some("X"), "vaporwave", None).unwrap_err();
        assert!(matches!(err, FolioError::UnknownTemplate(k) if k == "vaporwave"));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_get_missing() {
        let err = service().get("missing").unwrap_err();
        assert!(matches!(err, FolioError::DraftNotFound(_)));
    }

    #[test]
    fn test_set_field_text() {
        let service = service();
        let draft = service.create(None, "classic", None).unwrap();

        let updated = service
            .set_field(&draft.id, "about.name", "Ada Lovelace", false)
            .unwrap();

        assert_eq!(updated.data["about"]["name"], "Ada Lovelace");
        assert_eq!(updated.data["about"]["headline"], "");
    }

    #[test]
    fn test_set_field_chips_split() {
        let service = service();
        let draft = service.create(None, "modern", None).unwrap();

        let updated = service
            .set_field(&draft.id, "skills.items", "Rust, Go , ,SQL", false)
            .unwrap();
        assert_eq!(updated.data["skills"]["items"], json!(["Rust", "Go", "SQL"]));

        let updated = service
            .set_field(&updated.id, "projects.0.tech", "Rust,WASM", false)
            .unwrap();
        assert_eq!(updated.data["projects"][0]["tech"], json!(["Rust", "WASM"]));
    }

    #[test]
    fn test_set_field_outside_schema_is_string() {
        let service = service();
        let draft = service.create(None, "classic", None).unwrap();

        let updated = service
            .set_field(&draft.id, "headings.about", "Who I am", false)
            .unwrap();
        assert_eq!(updated.data["headings"]["about"], "Who I am");
    }

    #[test]
    fn test_set_field_json() {
        let service = service();
        let draft = service.create(None, "classic", None).unwrap();

        let updated = service
            .set_field(
                &draft.id,
                "experience",
                r#"[{"role":"Engineer","company":"Acme"}]"#,
                true,
            )
            .unwrap();
        assert_eq!(updated.data["experience"][0]["company"], "Acme");

        let err = service
            .set_field(&draft.id, "about.name", "{oops", true)
            .unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn test_set_field_invalid_path_leaves_draft() {
        let service = service();
        let draft = service.create(None, "classic", None).unwrap();

        let err = service
            .set_field(&draft.id, "about.name.first", "Ada", false)
            .unwrap_err();

        assert!(matches!(err, FolioError::InvalidPath(_)));
        assert_eq!(service.get(&draft.id).unwrap(), draft);
    }

    #[test]
    fn test_set_and_unset_theme() {
        let service = service();
        let draft = service.create(None, "classic", None).unwrap();

        let updated = service
            .set_theme(&draft.id, "accent", Some("#ff0000"))
            .unwrap();
        assert_eq!(updated.theme_overrides["--accent"], "#ff0000");

        let updated = service.set_theme(&draft.id, "--accent", None).unwrap();
        assert!(updated.theme_overrides.is_empty());

        assert!(service.set_theme(&draft.id, "--", Some("x")).is_err());
    }

    #[test]
    fn test_theme_var_reads_with_same_normalization() {
        let service = service();
        let draft = service.create(None, "classic", None).unwrap();
        service.set_theme(&draft.id, " accent", Some("red")).unwrap();

        let (key, value) = service.theme_var(&draft.id, " accent").unwrap();
        assert_eq!(key, "--accent");
        assert_eq!(value.as_deref(), Some("red"));

        let (key, value) = service.theme_var(&draft.id, "bg").unwrap();
        assert_eq!(key, "--bg");
        assert!(value.is_none());

        assert!(service.theme_var(&draft.id, "-- ").is_err());
    }

    #[test]
    fn test_rename_and_change_template() {
        let service = service();
        let draft = service.create(None, "classic", None).unwrap();

        let renamed = service.rename(&draft.id, "Dev Folio").unwrap();
        assert_eq!(renamed.title, "Dev Folio");

        let switched = service.change_template(&draft.id, "modern").unwrap();
        assert_eq!(switched.template_key, "modern");
        assert_eq!(switched.data, draft.data);

        assert!(service.change_template(&draft.id, "nope").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_data_round_trip_through_editor() {
        let temp = tempfile::TempDir::new().unwrap();
        let edited = temp.path().join("edited.json");
        fs::write(&edited, r#"{"about":{"name":"Edited"}}"#).unwrap();

        let service = service();
        let draft = service.create(None, "classic", None).unwrap();
        let scratch = temp.path().join("draft.json");
        // `cp <edited> <scratch>` stands in for a user saving the file
        let editor = EditorSession::new(format!("cp {}", edited.display()));

        let updated = service.edit_data(&draft.id, &editor, &scratch).unwrap();

        assert_eq!(updated.data, json!({ "about": { "name": "Edited" } }));
        assert!(!scratch.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_data_rejects_invalid_json() {
        let temp = tempfile::TempDir::new().unwrap();
        let edited = temp.path().join("edited.json");
        fs::write(&edited, "not json").unwrap();

        let service = service();
        let draft = service.create(None, "classic", None).unwrap();
        let editor = EditorSession::new(format!("cp {}", edited.display()));

        let err = service
            .edit_data(&draft.id, &editor, &temp.path().join("draft.json"))
            .unwrap_err();

        assert!(matches!(err, FolioError::Json(_)));
        assert_eq!(service.get(&draft.id).unwrap().data, draft.data);
    }
}
