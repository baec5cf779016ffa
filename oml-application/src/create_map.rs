use super::*;
use usecases::NewMap;

/// Creates a new map owned by the given user.
///
/// Slug generation and the insert run in a single write
/// transaction, so a concurrently created map with the same title
/// can never steal the chosen slug.
pub fn create_map(
    connections: &sqlite::Connections,
    owner: &User,
    new_map: NewMap,
) -> Result<Map> {
    let map = connections
        .exclusive()?
        .transaction(|conn| usecases::create_map(conn, owner, new_map))?;
    Ok(map)
}
