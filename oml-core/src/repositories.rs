// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Submitter details displayed next to a pending location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterProfile {
    pub first_name: String,
    pub last_name: String,
    pub picture_url: Option<String>,
}

pub trait UserRepo {
    /// Insert-or-update keyed on the user id.
    ///
    /// Must be atomic so that two concurrent first sign-ins of the
    /// same identity never produce duplicate rows.
    fn create_or_update_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait MapRepo {
    fn create_map(&self, map: &Map) -> Result<()>;
    fn update_map(&self, map: &Map) -> Result<()>;

    fn get_map(&self, id: &str) -> Result<Map>;
    fn get_map_by_slug(&self, slug: &str) -> Result<Map>;
    fn is_slug_in_use(&self, slug: &str) -> Result<bool>;

    // All slugs starting with the given prefix, so that slug
    // uniqueness can be resolved with a single query.
    fn map_slugs_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    // Most recently created first for deterministic pagination.
    fn recent_maps(&self, pagination: &Pagination) -> Result<Vec<Map>>;
    fn count_maps(&self) -> Result<usize>;
}

pub trait LocationRepo {
    fn create_location(&self, location: &Location) -> Result<()>;

    fn get_location(&self, id: &str) -> Result<Location>;
    fn locations_of_map(&self, map_id: &str, status: Option<ModerationStatus>)
        -> Result<Vec<Location>>;

    // Pending locations joined with their submitter's profile.
    fn pending_locations_of_map(&self, map_id: &str)
        -> Result<Vec<(Location, SubmitterProfile)>>;
    fn count_pending_locations(&self, map_id: &str) -> Result<u64>;

    /// Writes the status together with the derived `is_approved`
    /// flag. The two columns never disagree.
    fn set_location_status(&self, id: &str, status: ModerationStatus) -> Result<()>;

    fn delete_location(&self, id: &str) -> Result<()>;
}

pub trait VoteRepo {
    /// Fails with [`Error::AlreadyExists`] if the (map, user)
    /// pair has already voted.
    fn create_vote(&self, vote: &Vote) -> Result<()>;

    // Subset of the given map ids the user has voted for,
    // answered with a single query.
    fn user_voted_map_ids(&self, user_id: &str, map_ids: &[&str]) -> Result<Vec<Id>>;

    fn count_votes_of_map(&self, map_id: &str) -> Result<u64>;
}
