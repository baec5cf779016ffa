use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_or_update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_or_update_user(&self, user: &User) -> Result<()> {
        create_or_update_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_or_update_user(&self, user: &User) -> Result<()> {
        create_or_update_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

fn new_user_from_entity(u: &User) -> models::NewUser {
    models::NewUser {
        id: u.id.as_str(),
        email: u.email.as_str(),
        first_name: &u.first_name,
        last_name: &u.last_name,
        picture_url: u.picture_url.as_deref(),
        city: u.city.as_deref(),
        created_at: u.created_at.as_milliseconds(),
        updated_at: u.updated_at.as_milliseconds(),
    }
}

// Single-statement upsert keyed on the user id to avoid
// duplicate-row races between concurrent first sign-ins.
fn create_or_update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let new_user = new_user_from_entity(u);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .on_conflict(dsl::id)
        .do_update()
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let new_user = new_user_from_entity(u);
    let count = diesel::update(dsl::users.filter(dsl::id.eq(new_user.id)))
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)
        .map(into_user)?)
}

fn try_get_user(conn: &mut SqliteConnection, id: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(into_user))
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
