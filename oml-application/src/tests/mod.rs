
pub mod prelude {
    pub use oml_core::{
        entities::*,
        gateways::{identity::*, place_search::PlaceSearchGateway},
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use crate::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct DummyPlacesGW;

    impl PlaceSearchGateway for DummyPlacesGW {
        fn search_place(&self, _: &str) -> Option<MapPoint> {
            None
        }
    }

    pub struct StaticIdentityGW;

    impl IdentityGateway for StaticIdentityGW {
        fn verify_token(&self, token: &str) -> Option<ProviderIdentity> {
            match token {
                "alice" => Some(ProviderIdentity {
                    id: "sub-alice".into(),
                    email: "alice@example.com".parse().unwrap(),
                    full_name: Some("Alice Archer".into()),
                    picture_url: None,
                }),
                "bob" => Some(ProviderIdentity {
                    id: "sub-bob".into(),
                    email: "bob@example.com".parse().unwrap(),
                    full_name: Some("Bob Brook".into()),
                    picture_url: None,
                }),
                _ => None,
            }
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub identities: StaticIdentityGW,
        pub places: DummyPlacesGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            oml_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
            Self {
                db_connections,
                identities: StaticIdentityGW,
                places: DummyPlacesGW,
            }
        }

        pub fn sign_in(&self, token: &str) -> User {
            flows::resolve_current_user(&self.db_connections, &self.identities, token)
                .unwrap()
                .user
        }

        pub fn default_new_map(title: &str) -> usecases::NewMap {
            usecases::NewMap {
                title: title.into(),
                short_description: "A short description".into(),
                body: "A longer body text".into(),
                picture_url: None,
            }
        }
    }
}
