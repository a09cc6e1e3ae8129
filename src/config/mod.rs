use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "addrbook.toml";

const ENV_NAME_APP_NAME: &str = "APP_NAME";
const ENV_NAME_DEBUG: &str = "DEBUG";
const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_GEOCODE_URL: &str = "GEOCODE_URL";
const ENV_NAME_API_PREFIX: &str = "API_V1_STR";

#[derive(Debug, Clone)]
pub struct Config {
    pub app: App,
    pub db: Db,
    pub geocoding: Geocoding,
    pub webserver: WebServer,
}

#[derive(Debug, Clone)]
pub struct App {
    /// Also sent as `User-Agent` to the geocoding service.
    pub name: String,
    pub debug: bool,
}

#[derive(Debug, Clone)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

#[derive(Debug, Clone)]
pub struct Geocoding {
    pub url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct WebServer {
    pub api_prefix: String,
    pub enable_cors: bool,
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
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::try_default()
                }
                _ => Err(err.into()),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_with(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    fn override_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_NAME_APP_NAME) {
            self.app.name = name;
        }
        if let Some(debug) = lookup(ENV_NAME_DEBUG) {
            self.app.debug = parse_flag(&debug)
                .ok_or_else(|| anyhow!("Invalid value of {ENV_NAME_DEBUG}: '{debug}'"))?;
        }
        if let Some(db_url) = lookup(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Some(url) = lookup(ENV_NAME_GEOCODE_URL) {
            self.geocoding.url = url;
        }
        if let Some(prefix) = lookup(ENV_NAME_API_PREFIX) {
            self.webserver.api_prefix = normalize_api_prefix(&prefix)?;
        }
        Ok(())
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn normalize_api_prefix(prefix: &str) -> Result<String> {
    let prefix = prefix.trim();
    if !prefix.starts_with('/') {
        return Err(anyhow!("The API prefix must start with '/': '{prefix}'"));
    }
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok("/".to_string());
    }
    Ok(trimmed.to_string())
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let default = raw::Config::try_default()?;
        let raw::Config {
            app,
            db,
            geocoding,
            webserver,
        } = from;

        let app = app.unwrap_or_default();
        let default_app = default.app.unwrap_or_default();
        let app = App {
            name: app
                .name
                .or(default_app.name)
                .ok_or_else(|| anyhow!("Missing application name"))?,
            debug: app.debug.or(default_app.debug).unwrap_or_default(),
        };

        let db = db.unwrap_or_default();
        let default_db = default.db.unwrap_or_default();
        let db = Db {
            conn_sqlite: db
                .connection_sqlite
                .or(default_db.connection_sqlite)
                .ok_or_else(|| anyhow!("Missing SQLite connection"))?,
            conn_pool_size: db
                .connection_pool_size
                .or(default_db.connection_pool_size)
                .ok_or_else(|| anyhow!("Missing connection pool size"))?,
        };
        if db.conn_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }

        let geocoding = geocoding.unwrap_or_default();
        let default_geocoding = default.geocoding.unwrap_or_default();
        let geocoding = Geocoding {
            url: geocoding
                .url
                .or(default_geocoding.url)
                .ok_or_else(|| anyhow!("Missing geocoding URL"))?,
            timeout: geocoding
                .timeout
                .or(default_geocoding.timeout)
                .ok_or_else(|| anyhow!("Missing geocoding timeout"))?,
        };

        let webserver = webserver.unwrap_or_default();
        let default_webserver = default.webserver.unwrap_or_default();
        let api_prefix = webserver
            .api_prefix
            .or(default_webserver.api_prefix)
            .ok_or_else(|| anyhow!("Missing API prefix"))?;
        let webserver = WebServer {
            api_prefix: normalize_api_prefix(&api_prefix)?,
            enable_cors: webserver
                .cors
                .or(default_webserver.cors)
                .unwrap_or_default(),
        };

        Ok(Self {
            app,
            db,
            geocoding,
            webserver,
        })
    }
}
