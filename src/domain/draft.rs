//! Portfolio draft records and patch merging

use super::template::Theme;
use crate::error::{FolioError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An editable portfolio, before or after publishing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDraft {
    pub id: String,
    pub title: String,
    pub template_key: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub theme_overrides: Theme,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

/// Fields supplied when creating a draft
#[derive(Debug, Clone, PartialEq)]
pub struct NewDraft {
    pub title: String,
    pub template_key: String,
    pub data: Value,
    pub theme_overrides: Theme,
}

impl PortfolioDraft {
    /// Build a fresh draft; both timestamps start at `now`
    pub fn new(id: String, fields: NewDraft, now: DateTime<Utc>) -> Self {
        PortfolioDraft {
            id,
            title: fields.title,
            template_key: fields.template_key,
            data: fields.data,
            theme_overrides: fields.theme_overrides,
            created_at: now,
            updated_at: now,
            slug: None,
            is_published: None,
        }
    }

    pub fn is_published(&self) -> bool {
        self.is_published.unwrap_or(false)
    }

    /// Merge a patch into this draft.
    ///
    /// `id` and `created_at` never change. A slug is only taken when none is
    /// assigned yet, and the published flag is never cleared.
    pub fn apply(&mut self, patch: DraftPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(template_key) = patch.template_key {
            self.template_key = template_key;
        }
        if let Some(data) = patch.data {
            self.data = data;
        }
        if let Some(theme) = patch.theme_overrides {
            self.theme_overrides = theme;
        }
        if let Some(slug) = patch.publish_as {
            if self.slug.is_none() {
                self.slug = Some(slug);
            }
            self.is_published = Some(true);
        }

        self.updated_at = next_timestamp(self.updated_at, now);
    }
}

/// `now`, unless the clock has not moved past `previous`
fn next_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// A partial update to a draft. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub template_key: Option<String>,
    pub data: Option<Value>,
    pub theme_overrides: Option<Theme>,
    publish_as: Option<String>,
}

impl DraftPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_template_key(mut self, key: impl Into<String>) -> Self {
        self.template_key = Some(key.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_theme_overrides(mut self, theme: Theme) -> Self {
        self.theme_overrides = Some(theme);
        self
    }

    /// Marks the draft published under `slug`. Only publishing builds this.
    pub(crate) fn publish(slug: String) -> Self {
        DraftPatch {
            publish_as: Some(slug),
            ..Self::default()
        }
    }
}

/// Write `value` at a dotted path inside draft data.
///
/// Missing objects along the way are created. A numeric segment indexes an
/// array and may append one element past its end; anything further out, or
/// a path running through a scalar, is rejected.
pub fn set_data_path(data: &mut Value, path: &str, value: Value) -> Result<()> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.trim().is_empty()) {
        return Err(FolioError::InvalidPath(path.to_string()));
    }

    let mut current = data;
    for segment in segments {
        current =
            child_slot(current, segment).ok_or_else(|| FolioError::InvalidPath(path.to_string()))?;
    }

    *current = value;
    Ok(())
}

fn child_slot<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    let index = segment.parse::<usize>().ok();

    if node.is_null() {
        *node = match index {
            Some(_) => Value::Array(Vec::new()),
            None => Value::Object(Map::new()),
        };
    }

    match node {
        Value::Object(map) => Some(map.entry(segment.to_string()).or_insert(Value::Null)),
        Value::Array(items) => {
            let i = index?;
            if i == items.len() {
                items.push(Value::Null);
            }
            items.get_mut(i)
        }
        _ => None,
    }
}
