use crate::{id::Id, time::Timestamp};

/// A per-user, per-map endorsement recorded at most once.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub map_id     : Id,
    pub user_id    : Id,
    pub created_at : Timestamp,
}
