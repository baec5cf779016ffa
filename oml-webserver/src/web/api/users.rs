use super::*;

#[get("/users/current")]
pub fn get_current_user(
    db: sqlite::Connections,
    identities: &State<Identity>,
    auth: Auth,
) -> Result<json::CurrentUser> {
    let resolved = auth.current_user(&db, identities)?;
    Ok(Json(to_json::current_user(resolved)))
}
