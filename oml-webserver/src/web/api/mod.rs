use std::{fmt::Display, result};

use oml_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::{ContentType, Status},
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    web::sqlite,
};
use oml_application::prelude as flows;
use oml_core::{entities::*, repositories::*, usecases};

mod error;
mod locations;
mod maps;
mod media;
mod users;
mod votes;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   maps   --- //
        maps::get_check_slug,
        maps::get_maps,
        maps::post_map,
        maps::put_map,
        maps::get_map_by_slug,
        // ---   locations   --- //
        locations::post_location,
        locations::get_locations,
        locations::get_pending_locations,
        locations::post_review,
        locations::delete_location,
        // ---   votes   --- //
        votes::post_vote,
        votes::post_vote_status,
        // ---   users   --- //
        users::get_current_user,
        // ---   media   --- //
        media::post_image,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
