//! Publish use case

use crate::domain::{publish_slug, DraftPatch, PortfolioDraft};
use crate::error::{FolioError, Result};
use crate::infrastructure::DraftStore;
use tracing::info;

/// Publish a draft under a slug derived from its title.
///
/// The slug is fixed the first time a draft is published; publishing again
/// after a rename keeps the original address.
pub fn publish<S: DraftStore + ?Sized>(store: &S, id: &str) -> Result<PortfolioDraft> {
    let draft = store
        .get(id)?
        .ok_or_else(|| FolioError::DraftNotFound(id.to_string()))?;

    let slug = publish_slug(&draft.title, &draft.id);
    let published = store.update(id, DraftPatch::publish(slug))?;

    info!(id, slug = published.slug.as_deref().unwrap_or_default(), "published draft");
    Ok(published)
}

/// Path segment a draft is reachable under: its slug, or its id if it has
/// never been published
pub fn public_path(draft: &PortfolioDraft) -> &str {
    draft.slug.as_deref().unwrap_or(&draft.id)
}
