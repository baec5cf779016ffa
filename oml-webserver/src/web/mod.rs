use rocket::{config::Config as RocketCfg, Rocket, Route};

use oml_core::gateways::{
    identity::IdentityGateway, place_search::PlaceSearchGateway, storage::ObjectStorageGateway,
};

pub mod api;
mod guards;
mod sitemap;
mod sqlite;


/// Runtime settings of the web server.
#[derive(Debug, Clone)]
pub struct Cfg {
    /// Public base URL of the instance, e.g. `https://openmaplist.org`.
    /// Used for absolute URLs in the sitemap.
    pub base_url: String,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    identity: Box<dyn IdentityGateway + Send + Sync>,
    places: Box<dyn PlaceSearchGateway + Send + Sync>,
    storage: Box<dyn ObjectStorageGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways {
        identity,
        places,
        storage,
    } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let identity_gw = guards::Identity(identity);
    let places_gw = guards::Places(places);
    let storage_gw = guards::MediaStorage(storage);

    let mut instance = r
        .manage(db)
        .manage(identity_gw)
        .manage(places_gw)
        .manage(storage_gw)
        .manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", sitemap::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    identity: Box<dyn IdentityGateway + Send + Sync>,
    places: Box<dyn PlaceSearchGateway + Send + Sync>,
    storage: Box<dyn ObjectStorageGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways {
        identity,
        places,
        storage,
    };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
