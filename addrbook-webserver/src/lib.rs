#[macro_use]
extern crate log;

use std::sync::Arc;

use addrbook_core::gateways::geocode::GeoCodingGateway;
use addrbook_db_sqlite::Connections;
use anyhow::Result as Fallible;

mod adapters;
mod web;

pub use web::Cfg;

/// Launches the web server and blocks until it has been shut down.
pub fn run(
    connections: Connections,
    cfg: Cfg,
    geo_gw: Arc<dyn GeoCodingGateway + Send + Sync>,
    version: &'static str,
) -> Fallible<()> {
    rocket::execute(web::run(connections, cfg, geo_gw, version))
}
