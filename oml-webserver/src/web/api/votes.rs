use std::collections::HashMap;

use super::*;

#[post("/maps/<id>/votes")]
pub fn post_vote(
    db: sqlite::Connections,
    identities: &State<Identity>,
    auth: Auth,
    id: String,
) -> Result<()> {
    let user = auth.current_user(&db, identities)?.user;
    flows::upvote_map(&db, &user, &id)?;
    Ok(Json(()))
}

#[post("/votes/status", format = "application/json", data = "<request>")]
pub fn post_vote_status(
    db: sqlite::Connections,
    identities: &State<Identity>,
    auth: Auth,
    request: JsonResult<json::VoteStatusRequest>,
) -> Result<HashMap<String, bool>> {
    let map_ids = request?.into_inner().map_ids;
    let user = auth.try_current_user(&db, identities)?.map(|r| r.user);
    let map_id_refs: Vec<&str> = map_ids.iter().map(String::as_str).collect();
    let status = usecases::upvote_status(&db.shared()?, user.as_ref(), &map_id_refs)?;
    Ok(Json(
        status
            .into_iter()
            .map(|(id, voted)| (id.into(), voted))
            .collect(),
    ))
}
