use crate::{geo::MapPoint, id::Id, moderation::ModerationStatus, time::Timestamp};

/// A candidate point of interest submitted to a map,
/// subject to moderation by the map owner.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id          : Id,
    pub map_id      : Id,
    pub creator_id  : Id,
    pub name        : String,
    pub pos         : MapPoint,
    pub source_url  : String,
    pub note        : Option<String>,
    pub status      : ModerationStatus,
    pub is_approved : bool,
    pub created_at  : Timestamp,
}

impl Location {
    /// `is_approved` must always be derived from `status`.
    pub fn invariant_holds(&self) -> bool {
        self.is_approved == self.status.is_approved()
    }
}
