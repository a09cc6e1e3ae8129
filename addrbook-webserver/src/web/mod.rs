use std::sync::Arc;

use addrbook_core::gateways::geocode::GeoCodingGateway;
use addrbook_db_sqlite::Connections;
use anyhow::{anyhow, Result as Fallible};
use rocket::{config::Config as RocketCfg, Build, Rocket};

mod api;
mod guards;


use self::guards::{GeoCoding, Version};

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Mount point of all API routes, e.g. `/api/v1`
    pub api_prefix: String,
    pub enable_cors: bool,
}

pub(crate) struct InstanceOptions {
    pub rocket_cfg: Option<RocketCfg>,
    pub cfg: Cfg,
    pub version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: Connections,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
) -> Fallible<Rocket<Build>> {
    let InstanceOptions {
        rocket_cfg,
        cfg,
        version,
    } = options;
    info!("Mounting API routes at {}", cfg.api_prefix);
    let instance = match rocket_cfg {
        Some(rocket_cfg) => rocket::custom(rocket_cfg),
        None => rocket::build(),
    }
    .manage(connections)
    .manage(GeoCoding::new(geocoding))
    .manage(Version(version))
    .mount(cfg.api_prefix.as_str(), api::routes())
    .register("/", api::catchers());
    if !cfg.enable_cors {
        return Ok(instance);
    }
    info!("Enable CORS");
    let cors = rocket_cors::CorsOptions::default()
        .to_cors()
        .map_err(|err| anyhow!("Invalid CORS options: {err}"))?;
    Ok(instance.attach(cors))
}

pub(crate) async fn run(
    connections: Connections,
    cfg: Cfg,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    version: &'static str,
) -> Fallible<()> {
    let options = InstanceOptions {
        rocket_cfg: None,
        cfg,
        version,
    };
    let instance = rocket_instance(options, connections, geocoding)?;
    if let Err(err) = instance.launch().await {
        let err = anyhow!("Unable to run web server: {err}");
        error!("{err}");
        return Err(err);
    }
    Ok(())
}
