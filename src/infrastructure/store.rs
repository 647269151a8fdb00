//! Draft store over a key-value slot
//!
//! Every operation loads the whole collection, changes it in memory and
//! writes the whole collection back. There are no partial writes, no
//! transactions and no locking: one process edits a workspace at a time.

use crate::domain::{DraftPatch, NewDraft, PortfolioDraft};
use crate::error::{FolioError, Result};
use crate::infrastructure::slot::{KeyValueSlot, DRAFTS_KEY};
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Create, patch and query portfolio drafts
pub trait DraftStore {
    /// Store a new draft with a fresh id and matching timestamps
    fn create(&self, fields: NewDraft) -> Result<PortfolioDraft>;

    /// Merge a patch into an existing draft and refresh `updated_at`
    fn update(&self, id: &str, patch: DraftPatch) -> Result<PortfolioDraft>;

    fn get(&self, id: &str) -> Result<Option<PortfolioDraft>>;

    /// All drafts, most recently updated first
    fn list(&self) -> Result<Vec<PortfolioDraft>>;
}

impl<T: DraftStore + ?Sized> DraftStore for &T {
    fn create(&self, fields: NewDraft) -> Result<PortfolioDraft> {
        (**self).create(fields)
    }

    fn update(&self, id: &str, patch: DraftPatch) -> Result<PortfolioDraft> {
        (**self).update(id, patch)
    }

    fn get(&self, id: &str) -> Result<Option<PortfolioDraft>> {
        (**self).get(id)
    }

    fn list(&self) -> Result<Vec<PortfolioDraft>> {
        (**self).list()
    }
}

/// Draft store keeping the collection as one JSON array in a slot
#[derive(Debug)]
pub struct LocalDraftStore<S: KeyValueSlot> {
    slot: S,
}

impl<S: KeyValueSlot> LocalDraftStore<S> {
    pub fn new(slot: S) -> Self {
        LocalDraftStore { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Read the stored collection. Contents that fail to parse are treated
    /// as an empty collection.
    fn load_drafts(&self) -> Result<Vec<PortfolioDraft>> {
        let Some(contents) = self.slot.read()? else {
            return Ok(Vec::new());
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&contents) {
            Ok(drafts) => Ok(drafts),
            Err(e) => {
                warn!(
                    slot = DRAFTS_KEY,
                    error = %e,
                    "stored drafts are unreadable, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_drafts(&self, drafts: &[PortfolioDraft]) -> Result<()> {
        let contents = serde_json::to_string_pretty(drafts)?;
        self.slot.write(&contents)
    }
}

impl<S: KeyValueSlot> DraftStore for LocalDraftStore<S> {
    fn create(&self, fields: NewDraft) -> Result<PortfolioDraft> {
        let draft = PortfolioDraft::new(Uuid::new_v4().to_string(), fields, Utc::now());

        let mut drafts = self.load_drafts()?;
        drafts.push(draft.clone());
        self.save_drafts(&drafts)?;

        debug!(id = %draft.id, template = %draft.template_key, "created draft");
        Ok(draft)
    }

    fn update(&self, id: &str, patch: DraftPatch) -> Result<PortfolioDraft> {
        let mut drafts = self.load_drafts()?;
        let draft = drafts
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| FolioError::DraftNotFound(id.to_string()))?;

        draft.apply(patch, Utc::now());
        let updated = draft.clone();
        self.save_drafts(&drafts)?;

        debug!(id = %updated.id, updated_at = %updated.updated_at, "updated draft");
        Ok(updated)
    }

    fn get(&self, id: &str) -> Result<Option<PortfolioDraft>> {
        Ok(self.load_drafts()?.into_iter().find(|d| d.id == id))
    }

    fn list(&self) -> Result<Vec<PortfolioDraft>> {
        let mut drafts = self.load_drafts()?;
        drafts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(drafts)
    }
}
