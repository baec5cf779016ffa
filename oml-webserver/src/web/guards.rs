use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
};

use crate::web::sqlite;
use oml_application::{error::AppError, prelude as flows};
use oml_core::{
    gateways::{
        identity::IdentityGateway, place_search::PlaceSearchGateway,
        storage::ObjectStorageGateway,
    },
    usecases::{Error as ParameterError, ResolvedIdentity},
};

type Result<T> = std::result::Result<T, AppError>;

pub struct Identity(pub Box<dyn IdentityGateway + Send + Sync>);
pub struct Places(pub Box<dyn PlaceSearchGateway + Send + Sync>);
pub struct MediaStorage(pub Box<dyn ObjectStorageGateway + Send + Sync>);

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// The bearer token of a request, if any.
///
/// Token verification and profile resolution are deferred until a
/// handler actually needs the acting user, so that public routes
/// never pay for a round trip to the identity provider.
#[derive(Debug)]
pub struct Auth {
    bearer_token: Option<String>,
}

impl Auth {
    fn bearer_token(&self) -> Result<&str> {
        self.bearer_token
            .as_deref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn current_user(
        &self,
        db: &sqlite::Connections,
        identities: &Identity,
    ) -> Result<ResolvedIdentity> {
        flows::resolve_current_user(db, &*identities.0, self.bearer_token()?)
    }

    /// Like [`Self::current_user`], but anonymous requests resolve
    /// to `None` instead of failing.
    pub fn try_current_user(
        &self,
        db: &sqlite::Connections,
        identities: &Identity,
    ) -> Result<Option<ResolvedIdentity>> {
        let Some(token) = self.bearer_token.as_deref() else {
            return Ok(None);
        };
        flows::resolve_current_user(db, &*identities.0, token).map(Some)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_token = request
            .headers()
            .get("Authorization")
            .find_map(get_bearer_token)
            .map(ToOwned::to_owned);
        Outcome::Success(Self { bearer_token })
    }
}
