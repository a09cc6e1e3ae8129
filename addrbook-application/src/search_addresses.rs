use super::*;

pub fn search_by_coordinates(
    connections: &sqlite::Connections,
    center: MapPoint,
    radius: Distance,
) -> Result<Vec<Address>> {
    let db = connections.shared()?;
    Ok(usecases::search_by_coordinates(&db, center, radius)?)
}

/// Searches around the geocoded position of a free-text address.
pub fn search_by_address(
    connections: &sqlite::Connections,
    geo: &dyn GeoCodingGateway,
    address: &str,
    radius: Distance,
) -> Result<Vec<Address>> {
    usecases::check_search_radius(radius)?;
    let center = usecases::geocode_search_center(geo, address).inspect_err(|err| {
        debug!("No search center for '{address}': {err}");
    })?;
    search_by_coordinates(connections, center, radius)
}
