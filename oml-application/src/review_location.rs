use super::*;

/// Applies a moderation decision of the map owner.
pub fn review_location(
    connections: &sqlite::Connections,
    actor: &User,
    location_id: &str,
    status: ModerationStatus,
) -> Result<Location> {
    let location = connections
        .exclusive()?
        .transaction(|conn| usecases::moderate_location(conn, actor, location_id, status))?;
    Ok(location)
}

pub fn delete_location(
    connections: &sqlite::Connections,
    actor: &User,
    location_id: &str,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_location(conn, actor, location_id))?;
    Ok(())
}
