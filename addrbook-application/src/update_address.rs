use super::*;

/// Updates an existing address.
///
/// A missing position is resolved on a best-effort basis and the
/// update is stored even if the geocoding fails.
pub fn update_address(
    connections: &sqlite::Connections,
    geo: &dyn GeoCodingGateway,
    id: &str,
    update: usecases::UpdateAddress,
) -> Result<Address> {
    let mut storable = {
        let db = connections.shared()?;
        usecases::prepare_updated_address(&db, id, update)?
    };
    if let Err(err) = usecases::resolve_missing_position(geo, &mut storable) {
        warn!("Updating address {id} without a position: {err}");
    }
    let address = connections
        .exclusive()?
        .transaction(|conn| usecases::store_updated_address(conn, storable))?;
    Ok(address)
}
