use super::*;

impl<'a> VoteRepo for DbReadOnly<'a> {
    fn create_vote(&self, _vote: &Vote) -> Result<()> {
        unreachable!();
    }

    fn user_voted_map_ids(&self, user_id: &str, map_ids: &[&str]) -> Result<Vec<Id>> {
        user_voted_map_ids(&mut self.conn.borrow_mut(), user_id, map_ids)
    }
    fn count_votes_of_map(&self, map_id: &str) -> Result<u64> {
        count_votes_of_map(&mut self.conn.borrow_mut(), map_id)
    }
}

impl<'a> VoteRepo for DbReadWrite<'a> {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }

    fn user_voted_map_ids(&self, user_id: &str, map_ids: &[&str]) -> Result<Vec<Id>> {
        user_voted_map_ids(&mut self.conn.borrow_mut(), user_id, map_ids)
    }
    fn count_votes_of_map(&self, map_id: &str) -> Result<u64> {
        count_votes_of_map(&mut self.conn.borrow_mut(), map_id)
    }
}

impl<'a> VoteRepo for DbConnection<'a> {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }

    fn user_voted_map_ids(&self, user_id: &str, map_ids: &[&str]) -> Result<Vec<Id>> {
        user_voted_map_ids(&mut self.conn.borrow_mut(), user_id, map_ids)
    }
    fn count_votes_of_map(&self, map_id: &str) -> Result<u64> {
        count_votes_of_map(&mut self.conn.borrow_mut(), map_id)
    }
}

// The composite primary key on (map_id, user_id) turns a
// duplicate vote into a unique violation that surfaces as
// `Error::AlreadyExists` via `from_diesel_err`.
fn create_vote(conn: &mut SqliteConnection, v: &Vote) -> Result<()> {
    let new_vote = models::NewVote {
        map_id: v.map_id.as_str(),
        user_id: v.user_id.as_str(),
        created_at: v.created_at.as_milliseconds(),
    };
    diesel::insert_into(schema::votes::table)
        .values(&new_vote)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn user_voted_map_ids(
    conn: &mut SqliteConnection,
    user_id: &str,
    map_ids: &[&str],
) -> Result<Vec<Id>> {
    use schema::votes::dsl;
    Ok(dsl::votes
        .filter(dsl::user_id.eq(user_id))
        .filter(dsl::map_id.eq_any(map_ids))
        .select(dsl::map_id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_votes_of_map(conn: &mut SqliteConnection, map_id: &str) -> Result<u64> {
    use schema::votes::dsl;
    Ok(dsl::votes
        .filter(dsl::map_id.eq(map_id))
        .select(diesel::dsl::count(dsl::user_id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as u64)
}
