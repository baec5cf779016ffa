use super::*;
use oml_entities as e;

impl From<e::map::Map> for Map {
    fn from(from: e::map::Map) -> Self {
        let e::map::Map {
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
        Self {
            id: id.into(),
            slug: slug.into(),
            title,
            short_description,
            body,
            picture_url,
            owner_id: owner_id.into(),
            created_at: created_at.as_milliseconds(),
            updated_at: updated_at.as_milliseconds(),
        }
    }
}

impl From<e::map::Map> for MapRef {
    fn from(from: e::map::Map) -> Self {
        Self {
            id: from.id.into(),
            title: from.title,
            slug: from.slug.into(),
        }
    }
}

impl From<e::moderation::ModerationStatus> for ModerationStatus {
    fn from(from: e::moderation::ModerationStatus) -> Self {
        use e::moderation::ModerationStatus::*;
        match from {
            Pending => ModerationStatus::Pending,
            Approved => ModerationStatus::Approved,
            Rejected => ModerationStatus::Rejected,
        }
    }
}

impl From<ModerationStatus> for e::moderation::ModerationStatus {
    fn from(from: ModerationStatus) -> Self {
        use e::moderation::ModerationStatus as E;
        match from {
            ModerationStatus::Pending => E::Pending,
            ModerationStatus::Approved => E::Approved,
            ModerationStatus::Rejected => E::Rejected,
        }
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            map_id,
            creator_id,
            name,
            pos,
            source_url,
            note,
            status,
            is_approved,
            created_at,
        } = from;
        Self {
            id: id.into(),
            map_id: map_id.into(),
            creator_id: creator_id.into(),
            name,
            lat: pos.lat_deg(),
            lng: pos.lng_deg(),
            source_url,
            note,
            status: status.into(),
            is_approved,
            created_at: created_at.as_milliseconds(),
            distance: None,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            first_name,
            last_name,
            picture_url,
            city,
            ..
        } = from;
        Self {
            id: id.into(),
            email: email.into_string(),
            first_name,
            last_name,
            picture_url,
            city,
        }
    }
}
