//! Template catalog: editable schemas plus default visual themes

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// CSS custom properties keyed by variable name (e.g. `--accent`)
pub type Theme = BTreeMap<String, String>;

/// Kind of input a schema field is edited with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Multiline,
    Image,
    Date,
    Url,
    /// A list of short tags, entered comma separated
    Chips,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Multiline => "multiline",
            FieldType::Image => "image",
            FieldType::Date => "date",
            FieldType::Url => "url",
            FieldType::Chips => "chips",
        }
    }

    /// Empty value a fresh form starts with
    fn blank(&self) -> Value {
        match self {
            FieldType::Chips => Value::Array(Vec::new()),
            _ => Value::String(String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSection {
    pub key: String,
    pub label: String,
    pub fields: Vec<SchemaField>,
    #[serde(default)]
    pub repeatable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSchema {
    pub sections: Vec<SchemaSection>,
}

impl TemplateSchema {
    pub fn section(&self, key: &str) -> Option<&SchemaSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Build the empty data shape a new draft of this template starts with.
    ///
    /// Repeatable sections become empty arrays; other sections become an
    /// object holding one blank value per field.
    pub fn blank_data(&self) -> Value {
        let mut data = Map::new();
        for section in &self.sections {
            let value = if section.repeatable {
                Value::Array(Vec::new())
            } else {
                let fields = section
                    .fields
                    .iter()
                    .map(|f| (f.key.clone(), f.field_type.blank()))
                    .collect::<Map<_, _>>();
                Value::Object(fields)
            };
            data.insert(section.key.clone(), value);
        }
        Value::Object(data)
    }

    /// Resolve a dotted data path to the schema field it edits.
    ///
    /// `about.name` addresses a field of a plain section, `experience.0.role`
    /// a field of one entry in a repeatable section.
    pub fn locate(&self, path: &str) -> Option<&SchemaField> {
        let parts: Vec<&str> = path.split('.').collect();
        let section = self.section(parts.first()?)?;

        let field_key = if section.repeatable {
            if parts.len() != 3 || parts[1].parse::<usize>().is_err() {
                return None;
            }
            parts[2]
        } else {
            if parts.len() != 2 {
                return None;
            }
            parts[1]
        };

        section.fields.iter().find(|f| f.key == field_key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    pub key: String,
    pub name: String,
    pub description: String,
    pub schema: TemplateSchema,
    pub default_theme: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
}

fn field(key: &str, field_type: FieldType) -> SchemaField {
    SchemaField {
        key: key.to_string(),
        field_type,
        label: None,
    }
}

fn section(key: &str, label: &str, repeatable: bool, fields: Vec<SchemaField>) -> SchemaSection {
    SchemaSection {
        key: key.to_string(),
        label: label.to_string(),
        fields,
        repeatable,
    }
}

fn theme(vars: &[(&str, &str)]) -> Theme {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn classic_schema() -> TemplateSchema {
    use FieldType::*;

    TemplateSchema {
        sections: vec![
            section(
                "about",
                "About",
                false,
                vec![
                    field("name", Text),
                    field("headline", Text),
                    field("summary", Multiline),
                    field("photo", Image),
                ],
            ),
            section(
                "experience",
                "Experience",
                true,
                vec![
                    field("role", Text),
                    field("company", Text),
                    field("start", Date),
                    field("end", Date),
                    field("desc", Multiline),
                ],
            ),
            section(
                "projects",
                "Projects",
                true,
                vec![
                    field("name", Text),
                    field("link", Url),
                    field("tech", Chips),
                    field("summary", Multiline),
                ],
            ),
            section("skills", "Skills", false, vec![field("items", Chips)]),
        ],
    }
}

fn build_catalog() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor {
            key: "classic".to_string(),
            name: "Classic".to_string(),
            description: "Clean resume-to-portfolio template.".to_string(),
            schema: classic_schema(),
            default_theme: theme(&[
                ("--bg", "#ffffff"),
                ("--fg", "#0f172a"),
                ("--accent", "#6366f1"),
                ("--font", "Inter"),
            ]),
            preview_image: None,
        },
        TemplateDescriptor {
            key: "modern".to_string(),
            name: "Modern".to_string(),
            description: "Bold, dark hero with cards.".to_string(),
            // Shares the classic form; only the look differs
            schema: classic_schema(),
            default_theme: theme(&[
                ("--bg", "#0b1020"),
                ("--fg", "#e5e7eb"),
                ("--accent", "#a78bfa"),
                ("--font", "General Sans"),
            ]),
            preview_image: None,
        },
    ]
}

/// All built-in templates, in gallery order
pub fn list_templates() -> &'static [TemplateDescriptor] {
    static CATALOG: OnceLock<Vec<TemplateDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Look up a built-in template by key
pub fn get_template(key: &str) -> Option<&'static TemplateDescriptor> {
    list_templates().iter().find(|t| t.key == key)
}

/// Overlay per-draft theme overrides on a template's default theme
pub fn resolve_theme(default_theme: &Theme, overrides: &Theme) -> Theme {
    let mut resolved = default_theme.clone();
    for (var, value) in overrides {
        resolved.insert(var.clone(), value.clone());
    }
    resolved
}
