use std::cmp::Ordering;

use super::*;

#[post("/maps/<id>/locations", format = "application/json", data = "<new_location>")]
pub fn post_location(
    db: sqlite::Connections,
    identities: &State<Identity>,
    places: &State<Places>,
    auth: Auth,
    id: String,
    new_location: JsonResult<json::NewLocation>,
) -> Result<json::Location> {
    let submitter = auth.current_user(&db, identities)?.user;
    let new_location = from_json::new_location(new_location?.into_inner());
    let location = flows::submit_location(&db, &*places.0, &submitter, &id, new_location)?;
    Ok(Json(location.into()))
}

fn parse_near(near: &str) -> std::result::Result<MapPoint, ApiError> {
    let invalid = || {
        ApiError::OtherWithStatus(
            anyhow::anyhow!("Invalid near parameter: expected lat,lng"),
            rocket::http::Status::BadRequest,
        )
    };
    let (lat, lng) = near.split_once(',').ok_or_else(invalid)?;
    let lat = lat.trim().parse::<f64>().map_err(|_| invalid())?;
    let lng = lng.trim().parse::<f64>().map_err(|_| invalid())?;
    MapPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(invalid)
}

#[get("/maps/<id>/locations?<near>")]
pub fn get_locations(
    db: sqlite::Connections,
    id: String,
    near: Option<String>,
) -> Result<Vec<json::Location>> {
    let origin = near.as_deref().map(parse_near).transpose()?;
    let mut locations = usecases::get_approved_locations(&db.shared()?, &id)?;
    let locations = match origin {
        None => locations.into_iter().map(Into::into).collect(),
        Some(origin) => {
            locations.sort_by(|a, b| {
                origin
                    .distance_km(a.pos)
                    .partial_cmp(&origin.distance_km(b.pos))
                    .unwrap_or(Ordering::Equal)
            });
            locations
                .into_iter()
                .map(|location| to_json::location_near(location, origin))
                .collect()
        }
    };
    Ok(Json(locations))
}

#[get("/maps/<id>/locations/pending")]
pub fn get_pending_locations(
    db: sqlite::Connections,
    identities: &State<Identity>,
    auth: Auth,
    id: String,
) -> Result<Vec<json::PendingLocation>> {
    let actor = auth.current_user(&db, identities)?.user;
    let pending = usecases::list_pending_locations(&db.shared()?, &actor, &id)?;
    Ok(Json(pending.into_iter().map(to_json::pending_location).collect()))
}

#[post("/locations/<id>/review", format = "application/json", data = "<review>")]
pub fn post_review(
    db: sqlite::Connections,
    identities: &State<Identity>,
    auth: Auth,
    id: String,
    review: JsonResult<json::Review>,
) -> Result<json::Location> {
    let actor = auth.current_user(&db, identities)?.user;
    let status = review?.into_inner().status.into();
    let location = flows::review_location(&db, &actor, &id, status)?;
    Ok(Json(location.into()))
}

#[delete("/locations/<id>")]
pub fn delete_location(
    db: sqlite::Connections,
    identities: &State<Identity>,
    auth: Auth,
    id: String,
) -> Result<()> {
    let actor = auth.current_user(&db, identities)?.user;
    flows::delete_location(&db, &actor, &id)?;
    Ok(Json(()))
}
