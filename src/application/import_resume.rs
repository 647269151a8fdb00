//! Resume import use case

use crate::domain::prefill::{latest_resume, map_resume};
use crate::domain::{get_template, DraftPatch, PortfolioDraft};
use crate::error::{FolioError, Result};
use crate::infrastructure::DraftStore;
use serde_json::Value;
use tracing::{debug, info};

/// What an import did to the draft
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// Draft data was replaced with the mapped resume
    Applied(PortfolioDraft),
    /// Draft already had content and overwrite was not requested
    Skipped(PortfolioDraft),
}

/// Map the latest resume of a resume listing into draft data
pub fn resume_data(listing_json: &str) -> Result<Value> {
    let listing: Value = serde_json::from_str(listing_json)
        .map_err(|e| FolioError::ResumeImport(format!("not valid JSON: {}", e)))?;

    let resume = latest_resume(&listing).ok_or_else(|| {
        FolioError::ResumeImport("no resume with structured_data found".to_string())
    })?;
    let resume_id = resume.get("id").cloned().unwrap_or_default();
    debug!(resume = %resume_id, "prefilling from resume");

    Ok(map_resume(&resume["structured_data"]))
}

/// True when a draft holds nothing the user typed
fn has_no_content(draft: &PortfolioDraft) -> bool {
    match &draft.data {
        Value::Null => true,
        Value::Object(map) if map.is_empty() => true,
        data => get_template(&draft.template_key)
            .is_some_and(|t| *data == t.schema.blank_data()),
    }
}

/// Prefill a draft from the latest resume in a listing.
///
/// Existing content is only replaced when `overwrite` is set.
pub fn import_resume<S: DraftStore + ?Sized>(
    store: &S,
    id: &str,
    listing_json: &str,
    overwrite: bool,
) -> Result<ImportOutcome> {
    let draft = store
        .get(id)?
        .ok_or_else(|| FolioError::DraftNotFound(id.to_string()))?;

    let data = resume_data(listing_json)?;

    if !overwrite && !has_no_content(&draft) {
        debug!(id, "draft has content, resume import skipped");
        return Ok(ImportOutcome::Skipped(draft));
    }

    let updated = store.update(id, DraftPatch::new().with_data(data))?;
    info!(id, "imported resume into draft");
    Ok(ImportOutcome::Applied(updated))
}
