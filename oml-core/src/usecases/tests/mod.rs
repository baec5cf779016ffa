use std::cell::RefCell;

use super::prelude::*;
use crate::gateways::place_search::PlaceSearchGateway;

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory repository for use-case tests.
#[derive(Debug, Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub maps: RefCell<Vec<Map>>,
    pub locations: RefCell<Vec<Location>>,
    pub votes: RefCell<Vec<Vote>>,
    /// Number of vote lookups, to assert query-free paths.
    pub vote_queries: RefCell<usize>,
}

impl UserRepo for MockDb {
    fn create_or_update_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        } else {
            users.push(user.clone());
        }
        Ok(())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *existing = user.clone();
        Ok(())
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        self.try_get_user(id)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl MapRepo for MockDb {
    fn create_map(&self, map: &Map) -> RepoResult<()> {
        let mut maps = self.maps.borrow_mut();
        if maps.iter().any(|m| m.id == map.id || m.slug == map.slug) {
            return Err(RepoError::AlreadyExists);
        }
        maps.push(map.clone());
        Ok(())
    }

    fn update_map(&self, map: &Map) -> RepoResult<()> {
        let mut maps = self.maps.borrow_mut();
        let existing = maps
            .iter_mut()
            .find(|m| m.id == map.id)
            .ok_or(RepoError::NotFound)?;
        *existing = map.clone();
        Ok(())
    }

    fn get_map(&self, id: &str) -> RepoResult<Map> {
        self.maps
            .borrow()
            .iter()
            .find(|m| m.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_map_by_slug(&self, slug: &str) -> RepoResult<Map> {
        self.maps
            .borrow()
            .iter()
            .find(|m| m.slug.as_str() == slug)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn is_slug_in_use(&self, slug: &str) -> RepoResult<bool> {
        Ok(self.maps.borrow().iter().any(|m| m.slug.as_str() == slug))
    }

    fn map_slugs_with_prefix(&self, prefix: &str) -> RepoResult<Vec<String>> {
        Ok(self
            .maps
            .borrow()
            .iter()
            .filter(|m| m.slug.as_str().starts_with(prefix))
            .map(|m| m.slug.as_str().to_owned())
            .collect())
    }

    fn recent_maps(&self, pagination: &Pagination) -> RepoResult<Vec<Map>> {
        let mut maps: Vec<_> = self.maps.borrow().iter().cloned().collect();
        maps.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let offset = pagination.offset.unwrap_or(0) as usize;
        let limit = pagination.limit.unwrap_or(u64::MAX) as usize;
        Ok(maps.into_iter().skip(offset).take(limit).collect())
    }

    fn count_maps(&self) -> RepoResult<usize> {
        Ok(self.maps.borrow().len())
    }
}

impl LocationRepo for MockDb {
    fn create_location(&self, location: &Location) -> RepoResult<()> {
        self.locations.borrow_mut().push(location.clone());
        Ok(())
    }

    fn get_location(&self, id: &str) -> RepoResult<Location> {
        self.locations
            .borrow()
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn locations_of_map(
        &self,
        map_id: &str,
        status: Option<ModerationStatus>,
    ) -> RepoResult<Vec<Location>> {
        Ok(self
            .locations
            .borrow()
            .iter()
            .filter(|l| l.map_id.as_str() == map_id)
            .filter(|l| status.map_or(true, |s| l.status == s))
            .cloned()
            .collect())
    }

    fn pending_locations_of_map(
        &self,
        map_id: &str,
    ) -> RepoResult<Vec<(Location, SubmitterProfile)>> {
        let users = self.users.borrow();
        Ok(self
            .locations_of_map(map_id, Some(ModerationStatus::Pending))?
            .into_iter()
            .map(|l| {
                let profile = users
                    .iter()
                    .find(|u| u.id == l.creator_id)
                    .map(|u| SubmitterProfile {
                        first_name: u.first_name.clone(),
                        last_name: u.last_name.clone(),
                        picture_url: u.picture_url.clone(),
                    })
                    .unwrap_or(SubmitterProfile {
                        first_name: "User".into(),
                        last_name: String::new(),
                        picture_url: None,
                    });
                (l, profile)
            })
            .collect())
    }

    fn count_pending_locations(&self, map_id: &str) -> RepoResult<u64> {
        Ok(self
            .locations_of_map(map_id, Some(ModerationStatus::Pending))?
            .len() as u64)
    }

    fn set_location_status(&self, id: &str, status: ModerationStatus) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let location = locations
            .iter_mut()
            .find(|l| l.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        location.status = status;
        location.is_approved = status.is_approved();
        Ok(())
    }

    fn delete_location(&self, id: &str) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let len_before = locations.len();
        locations.retain(|l| l.id.as_str() != id);
        if locations.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

impl VoteRepo for MockDb {
    fn create_vote(&self, vote: &Vote) -> RepoResult<()> {
        let mut votes = self.votes.borrow_mut();
        if votes
            .iter()
            .any(|v| v.map_id == vote.map_id && v.user_id == vote.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        votes.push(vote.clone());
        Ok(())
    }

    fn user_voted_map_ids(&self, user_id: &str, map_ids: &[&str]) -> RepoResult<Vec<Id>> {
        *self.vote_queries.borrow_mut() += 1;
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.user_id.as_str() == user_id)
            .filter(|v| map_ids.contains(&v.map_id.as_str()))
            .map(|v| v.map_id.clone())
            .collect())
    }

    fn count_votes_of_map(&self, map_id: &str) -> RepoResult<u64> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.map_id.as_str() == map_id)
            .count() as u64)
    }
}

/// A place search that never finds anything.
#[derive(Debug)]
pub struct NoPlaces;

impl PlaceSearchGateway for NoPlaces {
    fn search_place(&self, _: &str) -> Option<MapPoint> {
        None
    }
}

/// A place search that answers every query with the same point.
#[derive(Debug)]
pub struct StaticPlaces(pub MapPoint);

impl PlaceSearchGateway for StaticPlaces {
    fn search_place(&self, _: &str) -> Option<MapPoint> {
        Some(self.0)
    }
}
