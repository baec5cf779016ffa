use super::*;

/// Records an upvote, at most once per user and map.
///
/// Racing duplicate votes are decided by the uniqueness
/// constraint of the vote ledger and both callers observe
/// success.
pub fn upvote_map(connections: &sqlite::Connections, user: &User, map_id: &str) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::upvote_map(conn, user, map_id))?;
    Ok(())
}
