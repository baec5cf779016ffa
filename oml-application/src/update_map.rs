use super::*;
use usecases::MapUpdate;

pub fn update_map(
    connections: &sqlite::Connections,
    actor: &User,
    map_id: &str,
    update: MapUpdate,
) -> Result<Map> {
    let map = connections
        .exclusive()?
        .transaction(|conn| usecases::update_map(conn, actor, map_id, update))?;
    Ok(map)
}
