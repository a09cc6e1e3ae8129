use super::*;

/// Creates a new address and resolves its position if it is missing.
///
/// Nothing is stored if the position could not be resolved.
pub fn create_address(
    connections: &sqlite::Connections,
    geo: &dyn GeoCodingGateway,
    new_address: usecases::NewAddress,
) -> Result<Address> {
    let mut storable = usecases::prepare_new_address(new_address)?;
    usecases::resolve_missing_position(geo, &mut storable).inspect_err(|err| {
        warn!(
            "Failed to create address '{}': {err}",
            storable.address().geocoding_query()
        );
    })?;
    let address = connections
        .exclusive()?
        .transaction(|conn| usecases::store_new_address(conn, storable))?;
    info!("Created address {}", address.id);
    Ok(address)
}
