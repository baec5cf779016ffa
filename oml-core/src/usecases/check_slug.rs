use std::collections::HashSet;

use super::prelude::*;
use oml_entities::slug::unique_slug;

pub fn check_slug_availability<R: MapRepo>(repo: &R, slug: &str) -> Result<bool> {
    Ok(!repo.is_slug_in_use(slug)?)
}

/// Generates a slug for the given title that is unique across
/// all maps. `current_slug` excludes a map's own slug when its
/// title is edited.
pub fn generate_unique_map_slug<R: MapRepo>(
    repo: &R,
    title: &str,
    current_slug: Option<&Slug>,
) -> Result<Slug> {
    let base = Slug::from_title(title);
    let mut existing: HashSet<String> = repo
        .map_slugs_with_prefix(base.as_str())?
        .into_iter()
        .collect();
    if let Some(current) = current_slug {
        existing.remove(current.as_str());
    }
    Ok(unique_slug(title, |candidate| existing.contains(candidate)))
}
