use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use oml_db_sqlite::Connections;
use oml_gateways::{media_store::FsMediaStore, oidc::OidcUserinfo, opencage::OpenCage};

mod cfg;

#[derive(Debug, Parser)]
#[command(version, about = "Community map sharing service")]
struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    cfg_file: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let cfg = cfg::Config::try_load_from_file_or_default(args.cfg_file.as_deref())?;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    oml_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    let identity_gw = OidcUserinfo::new(cfg.identity.userinfo_url)?;
    let places_gw = OpenCage::new(cfg.geocoding.opencage_api_key);
    let storage_gw = FsMediaStore::new(cfg.media.dir, cfg.media.public_base_path)?;

    let web_cfg = oml_webserver::Cfg {
        base_url: cfg.webserver.base_url,
    };
    let enable_cors = args.enable_cors || cfg.webserver.enable_cors;

    oml_webserver::run(
        connections,
        enable_cors,
        web_cfg,
        Box::new(identity_gw),
        Box::new(places_gw),
        Box::new(storage_gw),
    )
    .await;

    Ok(())
}
