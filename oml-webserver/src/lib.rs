use oml_core::gateways::{
    identity::IdentityGateway, place_search::PlaceSearchGateway, storage::ObjectStorageGateway,
};
use oml_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    identity_gw: Box<dyn IdentityGateway + Send + Sync>,
    places_gw: Box<dyn PlaceSearchGateway + Send + Sync>,
    storage_gw: Box<dyn ObjectStorageGateway + Send + Sync>,
) {
    web::run(
        connections.into(),
        enable_cors,
        cfg,
        identity_gw,
        places_gw,
        storage_gw,
    )
    .await;
}
