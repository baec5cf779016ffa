use std::collections::{HashMap, HashSet};

use super::prelude::*;

/// Records an upvote of a map, at most once per user.
///
/// A duplicate upvote is absorbed as a no-op success: the storage
/// layer's uniqueness constraint decides the winner when two
/// identical upvotes race, and both callers observe success.
pub fn upvote_map<R>(repo: &R, user: &User, map_id: &str) -> Result<()>
where
    R: MapRepo + VoteRepo,
{
    let map = repo.get_map(map_id)?;
    let vote = Vote {
        map_id: map.id,
        user_id: user.id.clone(),
        created_at: Timestamp::now(),
    };
    match repo.create_vote(&vote) {
        Ok(()) => Ok(()),
        Err(RepoError::AlreadyExists) => {
            log::debug!("User {} has already voted for map {}", user.id, map_id);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Answers "has this user voted?" for a whole batch of maps.
///
/// Unauthenticated actors get `false` for every id without a
/// single storage call; otherwise the batch is resolved with one
/// query.
pub fn upvote_status<R>(
    repo: &R,
    user: Option<&User>,
    map_ids: &[&str],
) -> Result<HashMap<Id, bool>>
where
    R: VoteRepo,
{
    if map_ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    let Some(user) = user else {
        return Ok(map_ids.iter().map(|id| (Id::from(*id), false)).collect());
    };
    let voted: HashSet<Id> = repo
        .user_voted_map_ids(user.id.as_str(), map_ids)?
        .into_iter()
        .collect();
    Ok(map_ids
        .iter()
        .map(|id| {
            let id = Id::from(*id);
            let has_voted = voted.contains(&id);
            (id, has_voted)
        })
        .collect())
}
