use super::prelude::*;
use crate::util::validate::is_valid_address_query;

/// Resolves a free-text address into a valid position.
///
/// Positions outside of the valid coordinate ranges are
/// treated as not found.
pub fn resolve_position<G>(geo: &G, query: &str) -> Option<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    let (lat, lng) = geo.resolve_address_lat_lng(query)?;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng);
    if pos.is_none() {
        warn!("Discarding invalid position ({lat}, {lng}) resolved for '{query}'");
    }
    pos
}

/// Fills in the position of an address that has none.
pub fn resolve_missing_position<G>(geo: &G, storable: &mut Storable) -> Result<()>
where
    G: GeoCodingGateway + ?Sized,
{
    let Storable(address) = storable;
    if address.has_valid_pos() {
        return Ok(());
    }
    let query = address.geocoding_query();
    let pos = resolve_position(geo, &query).ok_or(Error::Geocoding)?;
    debug!("Resolved position {pos} for '{query}'");
    address.pos = Some(pos);
    Ok(())
}

pub fn geocode_search_center<G>(geo: &G, query: &str) -> Result<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    if !is_valid_address_query(query) {
        return Err(Error::AddressQuery);
    }
    resolve_position(geo, query.trim()).ok_or(Error::Geocoding)
}
