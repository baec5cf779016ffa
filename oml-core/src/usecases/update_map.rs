use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct MapUpdate {
    pub title: String,
    pub short_description: String,
    pub body: String,
}

/// Overwrites the mutable fields of a map.
///
/// The slug is regenerated from the new title and re-checked for
/// uniqueness against all other maps, so a title edit can never
/// introduce a duplicate slug.
pub fn update_map<R: MapRepo>(
    repo: &R,
    actor: &User,
    map_id: &str,
    update: MapUpdate,
) -> Result<Map> {
    let mut map = repo.get_map(map_id)?;
    if map.owner_id != actor.id {
        return Err(Error::Forbidden);
    }
    let MapUpdate {
        title,
        short_description,
        body,
    } = update;
    if !validate::is_nonempty_text(&title) {
        return Err(Error::Title);
    }
    if !validate::is_nonempty_text(&short_description) {
        return Err(Error::ShortDescription);
    }
    if !validate::is_nonempty_text(&body) {
        return Err(Error::Body);
    }
    let slug = super::generate_unique_map_slug(repo, &title, Some(&map.slug))?;
    if slug != map.slug {
        log::info!("Changing slug of map {} from '{}' to '{}'", map.id, map.slug, slug);
    }
    map.slug = slug;
    map.title = title;
    map.short_description = short_description;
    map.body = body;
    map.updated_at = Timestamp::now();
    repo.update_map(&map)?;
    Ok(map)
}
