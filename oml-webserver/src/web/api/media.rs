use super::*;

#[post("/images", data = "<data>")]
pub fn post_image(
    db: sqlite::Connections,
    identities: &State<Identity>,
    storage: &State<MediaStorage>,
    auth: Auth,
    content_type: &ContentType,
    data: Vec<u8>,
) -> Result<json::StoredImage> {
    auth.current_user(&db, identities)?;
    let media_type = content_type.media_type();
    let content_type = format!("{}/{}", media_type.top(), media_type.sub());
    let url = storage.0.store_image(&data, &content_type)?;
    Ok(Json(json::StoredImage { url }))
}
