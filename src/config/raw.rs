use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = include_str!("addrbook.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub app: Option<App>,
    pub db: Option<Db>,
    pub geocoding: Option<Geocoding>,
    pub webserver: Option<WebServer>,
}

impl Config {
    pub fn try_default() -> anyhow::Result<Self> {
        Ok(toml::from_str(DEFAULT_CONFIG_FILE)?)
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct App {
    pub name: Option<String>,
    pub debug: Option<bool>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: Option<String>,
    pub connection_pool_size: Option<u32>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub api_prefix: Option<String>,
    pub cors: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg = Config::try_default().unwrap();
        assert!(cfg.app.is_some());
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        let geocoding = cfg.geocoding.unwrap();
        assert_eq!(geocoding.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [geocoding]
            timeout = "3s"
            "#,
        )
        .unwrap();
        assert!(cfg.db.is_none());
        let geocoding = cfg.geocoding.unwrap();
        assert!(geocoding.url.is_none());
        assert_eq!(geocoding.timeout, Some(Duration::from_secs(3)));
    }
}
