use num_traits::ToPrimitive as _;

use super::*;

impl<'a> LocationRepo for DbReadOnly<'a> {
    fn create_location(&self, _location: &Location) -> Result<()> {
        unreachable!();
    }
    fn set_location_status(&self, _id: &str, _status: ModerationStatus) -> Result<()> {
        unreachable!();
    }
    fn delete_location(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn locations_of_map(
        &self,
        map_id: &str,
        status: Option<ModerationStatus>,
    ) -> Result<Vec<Location>> {
        locations_of_map(&mut self.conn.borrow_mut(), map_id, status)
    }
    fn pending_locations_of_map(
        &self,
        map_id: &str,
    ) -> Result<Vec<(Location, SubmitterProfile)>> {
        pending_locations_of_map(&mut self.conn.borrow_mut(), map_id)
    }
    fn count_pending_locations(&self, map_id: &str) -> Result<u64> {
        count_pending_locations(&mut self.conn.borrow_mut(), map_id)
    }
}

impl<'a> LocationRepo for DbReadWrite<'a> {
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn set_location_status(&self, id: &str, status: ModerationStatus) -> Result<()> {
        set_location_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn delete_location(&self, id: &str) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }

    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn locations_of_map(
        &self,
        map_id: &str,
        status: Option<ModerationStatus>,
    ) -> Result<Vec<Location>> {
        locations_of_map(&mut self.conn.borrow_mut(), map_id, status)
    }
    fn pending_locations_of_map(
        &self,
        map_id: &str,
    ) -> Result<Vec<(Location, SubmitterProfile)>> {
        pending_locations_of_map(&mut self.conn.borrow_mut(), map_id)
    }
    fn count_pending_locations(&self, map_id: &str) -> Result<u64> {
        count_pending_locations(&mut self.conn.borrow_mut(), map_id)
    }
}

impl<'a> LocationRepo for DbConnection<'a> {
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn set_location_status(&self, id: &str, status: ModerationStatus) -> Result<()> {
        set_location_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn delete_location(&self, id: &str) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }

    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn locations_of_map(
        &self,
        map_id: &str,
        status: Option<ModerationStatus>,
    ) -> Result<Vec<Location>> {
        locations_of_map(&mut self.conn.borrow_mut(), map_id, status)
    }
    fn pending_locations_of_map(
        &self,
        map_id: &str,
    ) -> Result<Vec<(Location, SubmitterProfile)>> {
        pending_locations_of_map(&mut self.conn.borrow_mut(), map_id)
    }
    fn count_pending_locations(&self, map_id: &str) -> Result<u64> {
        count_pending_locations(&mut self.conn.borrow_mut(), map_id)
    }
}

fn status_to_i16(status: ModerationStatus) -> i16 {
    // The enum discriminants all fit into i16.
    status.to_i16().unwrap_or_default()
}

fn create_location(conn: &mut SqliteConnection, l: &Location) -> Result<()> {
    let new_location = models::NewLocation {
        id: l.id.as_str(),
        map_id: l.map_id.as_str(),
        creator_id: l.creator_id.as_str(),
        name: &l.name,
        lat: l.pos.lat_deg(),
        lng: l.pos.lng_deg(),
        source_url: &l.source_url,
        note: l.note.as_deref(),
        status: status_to_i16(l.status),
        is_approved: l.is_approved,
        created_at: l.created_at.as_milliseconds(),
    };
    diesel::insert_into(schema::locations::table)
        .values(&new_location)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_location(conn: &mut SqliteConnection, id: &str) -> Result<Location> {
    use schema::locations::dsl;
    dsl::locations
        .filter(dsl::id.eq(id))
        .first::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(try_into_location)
}

fn locations_of_map(
    conn: &mut SqliteConnection,
    map_id: &str,
    status: Option<ModerationStatus>,
) -> Result<Vec<Location>> {
    use schema::locations::dsl;
    let mut query = dsl::locations
        .filter(dsl::map_id.eq(map_id))
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::id)
        .into_boxed();
    if let Some(status) = status {
        query = query.filter(dsl::status.eq(status_to_i16(status)));
    }
    query
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(try_into_location)
        .collect()
}

fn pending_locations_of_map(
    conn: &mut SqliteConnection,
    map_id: &str,
) -> Result<Vec<(Location, SubmitterProfile)>> {
    use schema::{locations, users};
    locations::table
        .inner_join(users::table.on(users::id.eq(locations::creator_id)))
        .filter(locations::map_id.eq(map_id))
        .filter(locations::status.eq(status_to_i16(ModerationStatus::Pending)))
        .order_by(locations::created_at.desc())
        .then_order_by(locations::id)
        .select((
            locations::all_columns,
            users::first_name,
            users::last_name,
            users::picture_url,
        ))
        .load::<models::LocationWithSubmitter>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|row| {
            let models::LocationWithSubmitter {
                location,
                submitter_first_name,
                submitter_last_name,
                submitter_picture_url,
            } = row;
            let location = try_into_location(location)?;
            let submitter = SubmitterProfile {
                first_name: submitter_first_name,
                last_name: submitter_last_name,
                picture_url: submitter_picture_url,
            };
            Ok((location, submitter))
        })
        .collect()
}

fn count_pending_locations(conn: &mut SqliteConnection, map_id: &str) -> Result<u64> {
    use schema::locations::dsl;
    Ok(dsl::locations
        .filter(dsl::map_id.eq(map_id))
        .filter(dsl::status.eq(status_to_i16(ModerationStatus::Pending)))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as u64)
}

fn set_location_status(
    conn: &mut SqliteConnection,
    id: &str,
    status: ModerationStatus,
) -> Result<()> {
    use schema::locations::dsl;
    let count = diesel::update(dsl::locations.filter(dsl::id.eq(id)))
        .set((
            dsl::status.eq(status_to_i16(status)),
            dsl::is_approved.eq(status.is_approved()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_location(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::locations::dsl;
    let count = diesel::delete(dsl::locations.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
