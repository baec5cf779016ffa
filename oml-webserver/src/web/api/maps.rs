use super::*;

#[get("/check-slug?<slug>")]
pub fn get_check_slug(
    db: sqlite::Connections,
    slug: Option<String>,
) -> Result<json::SlugAvailability> {
    let Some(slug) = slug else {
        return Err(ApiError::OtherWithStatus(
            anyhow::anyhow!("Missing query parameter: slug"),
            rocket::http::Status::BadRequest,
        ));
    };
    let available = usecases::check_slug_availability(&db.shared()?, &slug)?;
    Ok(Json(json::SlugAvailability { available }))
}

#[get("/maps?<offset>&<limit>")]
pub fn get_maps(
    db: sqlite::Connections,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<json::MapListing> {
    let pagination = Pagination { offset, limit };
    let listing = usecases::list_maps(&db.shared()?, &pagination)?;
    Ok(Json(to_json::map_listing(listing)))
}

#[post("/maps", format = "application/json", data = "<new_map>")]
pub fn post_map(
    db: sqlite::Connections,
    identities: &State<Identity>,
    auth: Auth,
    new_map: JsonResult<json::NewMap>,
) -> Result<json::Map> {
    let owner = auth.current_user(&db, identities)?.user;
    let new_map = from_json::new_map(new_map?.into_inner());
    let map = flows::create_map(&db, &owner, new_map)?;
    Ok(Json(map.into()))
}

#[put("/maps/<id>", format = "application/json", data = "<update>")]
pub fn put_map(
    db: sqlite::Connections,
    identities: &State<Identity>,
    auth: Auth,
    id: String,
    update: JsonResult<json::MapUpdate>,
) -> Result<json::MapRef> {
    let actor = auth.current_user(&db, identities)?.user;
    let update = from_json::map_update(update?.into_inner());
    let map = flows::update_map(&db, &actor, &id, update)?;
    Ok(Json(map.into()))
}

#[get("/maps/by-slug/<slug>")]
pub fn get_map_by_slug(db: sqlite::Connections, slug: String) -> Result<json::Map> {
    let map = usecases::get_map_by_slug(&db.shared()?, &slug)?;
    Ok(Json(map.into()))
}
