pub use oml_boundary::*;

use oml_core::{entities as e, repositories, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn new_map(from: NewMap) -> usecases::NewMap {
        let NewMap {
            title,
            short_description,
            body,
            picture_url,
        } = from;
        usecases::NewMap {
            title,
            short_description,
            body,
            picture_url,
        }
    }

    pub fn map_update(from: MapUpdate) -> usecases::MapUpdate {
        let MapUpdate {
            title,
            short_description,
            body,
        } = from;
        usecases::MapUpdate {
            title,
            short_description,
            body,
        }
    }

    pub fn new_location(from: NewLocation) -> usecases::NewLocation {
        let NewLocation {
            name,
            source_url,
            note,
            query,
        } = from;
        usecases::NewLocation {
            name,
            source_url,
            note,
            query,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn map_listing(from: usecases::MapListing) -> MapListing {
        let usecases::MapListing { items, total } = from;
        MapListing {
            items: items.into_iter().map(Into::into).collect(),
            total: total as u64,
        }
    }

    pub fn current_user(from: usecases::ResolvedIdentity) -> CurrentUser {
        let usecases::ResolvedIdentity { user, is_new } = from;
        CurrentUser {
            user: user.into(),
            is_new,
        }
    }

    /// Renders the distance from the given origin into the
    /// serialized location.
    pub fn location_near(from: e::Location, origin: e::MapPoint) -> Location {
        let distance_km = origin.distance_km(from.pos);
        let mut location = Location::from(from);
        location.distance = Some(e::format_distance(distance_km));
        location
    }

    pub fn pending_location(
        from: (e::Location, repositories::SubmitterProfile),
    ) -> PendingLocation {
        let (location, submitter) = from;
        let repositories::SubmitterProfile {
            first_name,
            last_name,
            picture_url,
        } = submitter;
        PendingLocation {
            location: location.into(),
            submitter: SubmitterProfile {
                first_name,
                last_name,
                picture_url,
            },
        }
    }
}
