// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use oml_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod location;
mod map;
mod user;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn into_user(from: models::UserEntity) -> User {
    let models::UserEntity {
        id,
        email,
        first_name,
        last_name,
        picture_url,
        city,
        created_at,
        updated_at,
    } = from;
    User {
        id: id.into(),
        email: EmailAddress::new_unchecked(email),
        first_name,
        last_name,
        picture_url,
        city,
        created_at: Timestamp::from_milliseconds(created_at),
        updated_at: Timestamp::from_milliseconds(updated_at),
    }
}

fn into_map(from: models::MapEntity) -> Map {
    let models::MapEntity {
        id,
        slug,
        title,
        short_description,
        body,
        picture_url,
        owner_id,
        created_at,
        updated_at,
    } = from;
    Map {
        id: id.into(),
        slug: slug.into(),
        title,
        short_description,
        body,
        picture_url,
        owner_id: owner_id.into(),
        created_at: Timestamp::from_milliseconds(created_at),
        updated_at: Timestamp::from_milliseconds(updated_at),
    }
}

fn try_into_location(from: models::LocationEntity) -> Result<Location> {
    let models::LocationEntity {
        id,
        map_id,
        creator_id,
        name,
        lat,
        lng,
        source_url,
        note,
        status,
        is_approved,
        created_at,
    } = from;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(|| {
        repo::Error::Other(anyhow!(
            "Invalid position of location {id}: lat = {lat}, lng = {lng}"
        ))
    })?;
    let status = ModerationStatus::try_from(status)
        .map_err(|err| repo::Error::Other(anyhow!(err)))?;
    if is_approved != status.is_approved() {
        // This should never happen
        log::warn!(
            "Inconsistent moderation state of location {id}: status = {status:?}, is_approved = {is_approved}"
        );
    }
    Ok(Location {
        id: id.into(),
        map_id: map_id.into(),
        creator_id: creator_id.into(),
        name,
        pos,
        source_url,
        note,
        status,
        is_approved,
        created_at: Timestamp::from_milliseconds(created_at),
    })
}
