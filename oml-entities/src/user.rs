use crate::{email::EmailAddress, id::Id, time::Timestamp};

/// A registered user.
///
/// The id is issued by the external identity provider and is
/// stable across sign-ins.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id          : Id,
    pub email       : EmailAddress,
    pub first_name  : String,
    pub last_name   : String,
    pub picture_url : Option<String>,
    pub city        : Option<String>,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}

impl User {
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}
