//! Publish slug derivation

use regex::Regex;
use std::sync::OnceLock;

/// Used when a title has nothing left after slugifying
const FALLBACK_SLUG: &str = "portfolio";

/// Number of id characters appended to a slug
const ID_PREFIX_LEN: usize = 6;

/// Regex for runs of characters that cannot appear in a slug
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Lower-case a title and collapse everything but ASCII letters and digits
/// into single hyphens, trimming hyphens at both ends.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let slug = separator_regex().replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Slug a draft is published under: the slugified title plus the first
/// six characters of its id.
///
/// Two drafts only collide when both the title slug and the id prefix
/// match; nothing checks for that.
pub fn publish_slug(title: &str, id: &str) -> String {
    let prefix: String = id.chars().take(ID_PREFIX_LEN).collect();
    format!("{}-{}", slugify(title), prefix)
}
