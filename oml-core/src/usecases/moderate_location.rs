use super::prelude::*;

/// Transitions a location into the given moderation status.
///
/// Only the controller of the owning map may act. Transitions are
/// freely revisable: re-approving an already approved location is
/// an idempotent no-op, and approving after rejecting (or vice
/// versa) overwrites the previous decision. Rejecting always
/// clears `is_approved`.
pub fn moderate_location<R>(
    repo: &R,
    actor: &User,
    location_id: &str,
    status: ModerationStatus,
) -> Result<Location>
where
    R: MapRepo + LocationRepo,
{
    let location = repo.get_location(location_id)?;
    authorize_map_owner(repo, actor, location.map_id.as_str())?;
    log::info!(
        "Changing moderation status of location {} from {:?} to {:?}",
        location.id,
        location.status,
        status
    );
    repo.set_location_status(location_id, status)?;
    let location = repo.get_location(location_id)?;
    debug_assert!(location.invariant_holds());
    Ok(location)
}

/// Pending submissions of a map together with their submitter
/// profiles, visible to the map owner only.
pub fn list_pending_locations<R>(
    repo: &R,
    actor: &User,
    map_id: &str,
) -> Result<Vec<(Location, SubmitterProfile)>>
where
    R: MapRepo + LocationRepo,
{
    authorize_map_owner(repo, actor, map_id)?;
    Ok(repo.pending_locations_of_map(map_id)?)
}

pub fn count_pending_locations<R>(repo: &R, map_id: &str) -> Result<u64>
where
    R: LocationRepo,
{
    Ok(repo.count_pending_locations(map_id)?)
}

pub fn delete_location<R>(repo: &R, actor: &User, location_id: &str) -> Result<()>
where
    R: MapRepo + LocationRepo,
{
    let location = repo.get_location(location_id)?;
    authorize_map_owner(repo, actor, location.map_id.as_str())?;
    log::info!("Deleting location {} from map {}", location.id, location.map_id);
    Ok(repo.delete_location(location_id)?)
}

fn authorize_map_owner<R: MapRepo>(repo: &R, actor: &User, map_id: &str) -> Result<()> {
    let map = repo.get_map(map_id)?;
    if map.owner_id != actor.id {
        return Err(Error::Forbidden);
    }
    Ok(())
}
