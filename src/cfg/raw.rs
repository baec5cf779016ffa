use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("openmaplist.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub identity: Option<Identity>,
    pub geocoding: Option<Geocoding>,
    pub media: Option<Media>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub base_url: String,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Identity {
    pub userinfo_url: String,
}

impl Default for Identity {
    fn default() -> Self {
        Config::default().identity.expect("Identity configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub api_key: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Media {
    pub dir: PathBuf,
    pub public_base_path: String,
}

impl Default for Media {
    fn default() -> Self {
        Config::default().media.expect("Media configuration")
    }
}
