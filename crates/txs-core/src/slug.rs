//! Slug normalization and deterministic output naming.

use std::path::Path;

use crate::errors::CoreError;

/// Normalize free text into a URL-safe slug.
///
/// ASCII alphanumerics are lowercased and kept, `_` is kept, every other run
/// of characters collapses into a single `-`. Leading and trailing
/// separators are trimmed.
///
/// # Errors
///
/// Returns [`CoreError::EmptySlug`] if nothing usable remains.
pub fn slugify(input: &str) -> Result<String, CoreError> {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        return Err(CoreError::EmptySlug(input.to_string()));
    }
    Ok(slug)
}

/// Derive a resource slug from a local file name (stem only).
///
/// # Errors
///
/// Returns [`CoreError::EmptySlug`] if the path has no usable stem.
pub fn slug_from_path(path: &Path) -> Result<String, CoreError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CoreError::EmptySlug(path.display().to_string()))?;
    slugify(stem)
}

/// File name of a downloaded translation: `{resource_slug}_{language_code}`.
///
/// Unique for every distinct (resource, language) pair as long as slugs do
/// not themselves end in `_{code}` of another pair.
#[must_use]
pub fn translation_file_name(resource_slug: &str, language_code: &str) -> String {
    format!("{resource_slug}_{language_code}")
}
