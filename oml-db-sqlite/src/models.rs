// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub picture_url: Option<&'a str>,
    pub city: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub picture_url: Option<String>,
    pub city: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = maps)]
pub struct NewMap<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub title: &'a str,
    pub short_description: &'a str,
    pub body: &'a str,
    pub picture_url: Option<&'a str>,
    pub owner_id: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct MapEntity {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub body: String,
    pub picture_url: Option<String>,
    pub owner_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = locations)]
pub struct NewLocation<'a> {
    pub id: &'a str,
    pub map_id: &'a str,
    pub creator_id: &'a str,
    pub name: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub source_url: &'a str,
    pub note: Option<&'a str>,
    pub status: i16,
    pub is_approved: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct LocationEntity {
    pub id: String,
    pub map_id: String,
    pub creator_id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub source_url: String,
    pub note: Option<String>,
    pub status: i16,
    pub is_approved: bool,
    pub created_at: i64,
}

// Loaded from a nested tuple select: all location columns
// followed by the joined submitter columns.
#[derive(Queryable)]
pub struct LocationWithSubmitter {
    pub location: LocationEntity,
    pub submitter_first_name: String,
    pub submitter_last_name: String,
    pub submitter_picture_url: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = votes)]
pub struct NewVote<'a> {
    pub map_id: &'a str,
    pub user_id: &'a str,
    pub created_at: i64,
}
