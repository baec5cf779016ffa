use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Result;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "openmaplist.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub identity: Identity,
    pub geocoding: Geocoding,
    pub media: Media,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
            cfg.geocoding.opencage_api_key = Some(api_key);
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub base_url: String,
    pub enable_cors: bool,
}

pub struct Identity {
    /// Userinfo endpoint of the OpenID Connect provider.
    pub userinfo_url: String,
}

pub struct Geocoding {
    pub opencage_api_key: Option<String>,
}

pub struct Media {
    /// File system directory for uploaded images.
    pub dir: PathBuf,
    pub public_base_path: String,
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config {
            db,
            webserver,
            identity,
            geocoding,
            media,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { base_url, cors } = webserver.unwrap_or_default();
        let webserver = WebServer {
            base_url,
            enable_cors: cors,
        };

        let raw::Identity { userinfo_url } = identity.unwrap_or_default();
        let identity = Identity { userinfo_url };

        let raw::Geocoding { api_key } = geocoding.unwrap_or_default();
        let geocoding = Geocoding {
            opencage_api_key: api_key,
        };

        let raw::Media {
            dir,
            public_base_path,
        } = media.unwrap_or_default();
        let media = Media {
            dir,
            public_base_path,
        };

        Self {
            db,
            webserver,
            identity,
            geocoding,
            media,
        }
    }
}
