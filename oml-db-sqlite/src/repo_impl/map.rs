use super::*;

impl<'a> MapRepo for DbReadOnly<'a> {
    fn create_map(&self, _map: &Map) -> Result<()> {
        unreachable!();
    }
    fn update_map(&self, _map: &Map) -> Result<()> {
        unreachable!();
    }

    fn get_map(&self, id: &str) -> Result<Map> {
        get_map(&mut self.conn.borrow_mut(), id)
    }
    fn get_map_by_slug(&self, slug: &str) -> Result<Map> {
        get_map_by_slug(&mut self.conn.borrow_mut(), slug)
    }
    fn is_slug_in_use(&self, slug: &str) -> Result<bool> {
        is_slug_in_use(&mut self.conn.borrow_mut(), slug)
    }
    fn map_slugs_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        map_slugs_with_prefix(&mut self.conn.borrow_mut(), prefix)
    }
    fn recent_maps(&self, pagination: &Pagination) -> Result<Vec<Map>> {
        recent_maps(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_maps(&self) -> Result<usize> {
        count_maps(&mut self.conn.borrow_mut())
    }
}

impl<'a> MapRepo for DbReadWrite<'a> {
    fn create_map(&self, map: &Map) -> Result<()> {
        create_map(&mut self.conn.borrow_mut(), map)
    }
    fn update_map(&self, map: &Map) -> Result<()> {
        update_map(&mut self.conn.borrow_mut(), map)
    }

    fn get_map(&self, id: &str) -> Result<Map> {
        get_map(&mut self.conn.borrow_mut(), id)
    }
    fn get_map_by_slug(&self, slug: &str) -> Result<Map> {
        get_map_by_slug(&mut self.conn.borrow_mut(), slug)
    }
    fn is_slug_in_use(&self, slug: &str) -> Result<bool> {
        is_slug_in_use(&mut self.conn.borrow_mut(), slug)
    }
    fn map_slugs_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        map_slugs_with_prefix(&mut self.conn.borrow_mut(), prefix)
    }
    fn recent_maps(&self, pagination: &Pagination) -> Result<Vec<Map>> {
        recent_maps(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_maps(&self) -> Result<usize> {
        count_maps(&mut self.conn.borrow_mut())
    }
}

impl<'a> MapRepo for DbConnection<'a> {
    fn create_map(&self, map: &Map) -> Result<()> {
        create_map(&mut self.conn.borrow_mut(), map)
    }
    fn update_map(&self, map: &Map) -> Result<()> {
        update_map(&mut self.conn.borrow_mut(), map)
    }

    fn get_map(&self, id: &str) -> Result<Map> {
        get_map(&mut self.conn.borrow_mut(), id)
    }
    fn get_map_by_slug(&self, slug: &str) -> Result<Map> {
        get_map_by_slug(&mut self.conn.borrow_mut(), slug)
    }
    fn is_slug_in_use(&self, slug: &str) -> Result<bool> {
        is_slug_in_use(&mut self.conn.borrow_mut(), slug)
    }
    fn map_slugs_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        map_slugs_with_prefix(&mut self.conn.borrow_mut(), prefix)
    }
    fn recent_maps(&self, pagination: &Pagination) -> Result<Vec<Map>> {
        recent_maps(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_maps(&self) -> Result<usize> {
        count_maps(&mut self.conn.borrow_mut())
    }
}

fn new_map_from_entity(m: &Map) -> models::NewMap {
    models::NewMap {
        id: m.id.as_str(),
        slug: m.slug.as_str(),
        title: &m.title,
        short_description: &m.short_description,
        body: &m.body,
        picture_url: m.picture_url.as_deref(),
        owner_id: m.owner_id.as_str(),
        created_at: m.created_at.as_milliseconds(),
        updated_at: m.updated_at.as_milliseconds(),
    }
}

fn create_map(conn: &mut SqliteConnection, m: &Map) -> Result<()> {
    let new_map = new_map_from_entity(m);
    diesel::insert_into(schema::maps::table)
        .values(&new_map)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_map(conn: &mut SqliteConnection, m: &Map) -> Result<()> {
    use schema::maps::dsl;
    let new_map = new_map_from_entity(m);
    let count = diesel::update(dsl::maps.filter(dsl::id.eq(new_map.id)))
        .set(&new_map)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_map(conn: &mut SqliteConnection, id: &str) -> Result<Map> {
    use schema::maps::dsl;
    Ok(dsl::maps
        .filter(dsl::id.eq(id))
        .first::<models::MapEntity>(conn)
        .map_err(from_diesel_err)
        .map(into_map)?)
}

fn get_map_by_slug(conn: &mut SqliteConnection, slug: &str) -> Result<Map> {
    use schema::maps::dsl;
    Ok(dsl::maps
        .filter(dsl::slug.eq(slug))
        .first::<models::MapEntity>(conn)
        .map_err(from_diesel_err)
        .map(into_map)?)
}

fn is_slug_in_use(conn: &mut SqliteConnection, slug: &str) -> Result<bool> {
    use schema::maps::dsl;
    let count = dsl::maps
        .filter(dsl::slug.eq(slug))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn map_slugs_with_prefix(conn: &mut SqliteConnection, prefix: &str) -> Result<Vec<String>> {
    use schema::maps::dsl;
    // LIKE special characters cannot occur in a slug, so the
    // prefix is safe to interpolate into the pattern.
    debug_assert!(!prefix.contains(['%', '_']));
    Ok(dsl::maps
        .filter(dsl::slug.like(format!("{prefix}%")))
        .select(dsl::slug)
        .load::<String>(conn)
        .map_err(from_diesel_err)?)
}

fn recent_maps(conn: &mut SqliteConnection, pagination: &Pagination) -> Result<Vec<Map>> {
    use schema::maps::dsl;
    let mut query = dsl::maps
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::id)
        .into_boxed();
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    Ok(query
        .load::<models::MapEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(into_map)
        .collect())
}

fn count_maps(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::maps::dsl;
    Ok(dsl::maps
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
