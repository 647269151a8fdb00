//! Public page lookup

use crate::domain::{get_template, resolve_theme, PortfolioDraft, TemplateDescriptor, Theme};
use crate::error::{FolioError, Result};
use crate::infrastructure::DraftStore;
use tracing::debug;

/// Everything a public page is rendered from
#[derive(Debug, Clone)]
pub struct PublicView {
    pub draft: PortfolioDraft,
    /// `None` when the draft names a template this build does not ship
    pub template: Option<&'static TemplateDescriptor>,
    pub theme: Theme,
}

/// Find the draft served at `/p/<slug>`.
///
/// A published draft with a matching slug wins. Failing that, the input is
/// tried as a raw draft id, published or not. That fallback exists for local
/// previews and bypasses the publish gate; it must go before drafts are ever
/// kept in shared storage.
pub fn find_public<S: DraftStore + ?Sized>(
    store: &S,
    slug: &str,
) -> Result<Option<PortfolioDraft>> {
    let drafts = store.list()?;

    if let Some(draft) = drafts
        .iter()
        .find(|d| d.is_published() && d.slug.as_deref() == Some(slug))
    {
        return Ok(Some(draft.clone()));
    }

    let by_id = drafts.into_iter().find(|d| d.id == slug);
    if let Some(draft) = &by_id {
        debug!(
            id = %draft.id,
            published = draft.is_published(),
            "public lookup fell back to raw id"
        );
    }
    Ok(by_id)
}

/// Resolve a public page: the draft, its template and its effective theme
pub fn public_view<S: DraftStore + ?Sized>(store: &S, slug: &str) -> Result<PublicView> {
    let draft =
        find_public(store, slug)?.ok_or_else(|| FolioError::PublicNotFound(slug.to_string()))?;

    let template = get_template(&draft.template_key);
    let theme = match template {
        Some(t) => resolve_theme(&t.default_theme, &draft.theme_overrides),
        None => draft.theme_overrides.clone(),
    };

    Ok(PublicView {
        draft,
        template,
        theme,
    })
}
