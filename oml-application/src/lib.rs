#[macro_use]
extern crate log;

mod create_map;
mod resolve_current_user;
mod review_location;
mod submit_location;
mod update_map;
mod vote_map;

pub mod prelude {
    pub use super::{
        create_map::*, resolve_current_user::*, review_location::*, submit_location::*,
        update_map::*, vote_map::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use oml_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use oml_db_sqlite::Connections;
}
