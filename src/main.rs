use std::sync::Arc;

use anyhow::Result;
use clap::Parser as _;

use addrbook_db_sqlite::Connections;
use addrbook_gateways::nominatim::Nominatim;

mod cli;
mod config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config_file.as_deref())?;
    init_logging(cfg.app.debug);
    log::info!("Starting {} v{VERSION}", cfg.app.name);

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;

    addrbook_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    log::info!("Geocoding addresses with {}", cfg.geocoding.url);
    // The blocking client must be created and finally dropped
    // outside of the async runtime.
    let geo_gw = Arc::new(Nominatim::try_new(
        cfg.geocoding.url,
        cfg.app.name,
        cfg.geocoding.timeout,
    )?);

    let web_cfg = addrbook_webserver::Cfg {
        api_prefix: cfg.webserver.api_prefix,
        enable_cors: args.enable_cors || cfg.webserver.enable_cors,
    };
    addrbook_webserver::run(connections, web_cfg, geo_gw.clone(), VERSION)
}
