use crate::{id::Id, slug::Slug, time::Timestamp};

/// A user-owned, publicly viewable named collection of locations.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub id                : Id,
    pub slug              : Slug,
    pub title             : String,
    pub short_description : String,
    pub body              : String,
    pub picture_url       : Option<String>,
    pub owner_id          : Id,
    pub created_at        : Timestamp,
    pub updated_at        : Timestamp,
}
