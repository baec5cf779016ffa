use super::prelude::*;
use crate::{
    gateways::place_search::PlaceSearchGateway,
    util::{parse, validate},
};

#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub source_url: String,
    pub note: Option<String>,
    /// Free-text place query. When present it takes precedence
    /// over coordinate extraction from the source URL.
    pub query: Option<String>,
}

/// Validates and records a proposed location against a map.
///
/// Both coordinate-acquisition paths (URL extraction and place
/// lookup) normalize into the same location shape. Extraction
/// failures are rejected instead of silently defaulting to (0, 0).
/// The new location always starts out pending.
pub fn submit_location<R, G>(
    repo: &R,
    places: &G,
    submitter: &User,
    map_id: &str,
    new_location: NewLocation,
) -> Result<Location>
where
    R: MapRepo + LocationRepo,
    G: PlaceSearchGateway + ?Sized,
{
    let map = repo.get_map(map_id)?;
    let NewLocation {
        name,
        source_url,
        note,
        query,
    } = new_location;
    if !validate::is_nonempty_text(&name) {
        return Err(Error::LocationName);
    }
    let pos = match &query {
        Some(query) => places.search_place(query).ok_or(Error::PlaceNotFound)?,
        None => {
            let (lat, lng) =
                parse::extract_lat_lng_from_url(&source_url).ok_or(Error::SourceUrl)?;
            MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?
        }
    };
    let status = ModerationStatus::default();
    let location = Location {
        id: Id::new(),
        map_id: map.id.clone(),
        creator_id: submitter.id.clone(),
        name,
        pos,
        source_url,
        note,
        status,
        is_approved: status.is_approved(),
        created_at: Timestamp::now(),
    };
    debug_assert!(location.invariant_holds());
    log::info!(
        "Submitting location {} to map {} (pending moderation)",
        location.id,
        map.id
    );
    repo.create_location(&location)?;
    Ok(location)
}
