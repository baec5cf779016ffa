pub mod entities {
    pub use oml_entities::{
        email::*, geo::*, id::*, location::*, map::*, moderation::*, slug::*, time::*, user::*,
        vote::*,
    };
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use repositories::Error as RepoError;

pub mod prelude {
    pub use crate::{entities::*, repositories::*};
}
