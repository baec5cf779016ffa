use oml_core::gateways::place_search::PlaceSearchGateway;

use super::*;
use usecases::NewLocation;

/// Validates and records a proposed location for a map.
///
/// The place lookup happens inside the transaction to keep the
/// whole submission atomic. Lookups are only performed after the
/// map has been confirmed to exist.
pub fn submit_location(
    connections: &sqlite::Connections,
    places: &dyn PlaceSearchGateway,
    submitter: &User,
    map_id: &str,
    new_location: NewLocation,
) -> Result<Location> {
    let location = connections.exclusive()?.transaction(|conn| {
        usecases::submit_location(conn, places, submitter, map_id, new_location).map_err(|err| {
            warn!("Failed to submit location to map {map_id}: {err}");
            err
        })
    })?;
    Ok(location)
}
