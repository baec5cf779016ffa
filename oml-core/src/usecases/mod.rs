mod check_slug;
mod create_map;
mod error;
mod list_maps;
mod moderate_location;
mod resolve_identity;
mod submit_location;
mod update_map;
mod vote_map;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    check_slug::*, create_map::*, error::Error, list_maps::*, moderate_location::*,
    resolve_identity::*, submit_location::*, update_map::*, vote_map::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, RepoError};
}
use self::prelude::*;

pub fn get_map_by_slug<R: MapRepo>(repo: &R, slug: &str) -> Result<Map> {
    Ok(repo.get_map_by_slug(slug)?)
}

pub fn get_approved_locations<R: LocationRepo>(repo: &R, map_id: &str) -> Result<Vec<Location>> {
    Ok(repo.locations_of_map(map_id, Some(ModerationStatus::Approved))?)
}

pub fn count_votes_of_map<R: VoteRepo>(repo: &R, map_id: &str) -> Result<u64> {
    Ok(repo.count_votes_of_map(map_id)?)
}
