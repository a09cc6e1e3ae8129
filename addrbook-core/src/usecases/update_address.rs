use super::{pos_from_coords, prelude::*};

/// Partial update of an existing address.
///
/// Fields that are `None` remain unchanged. A coordinate of
/// `Some(None)` is removed from the current position.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UpdateAddress {
    pub name        : Option<String>,
    pub building    : Option<String>,
    pub area        : Option<String>,
    pub city        : Option<String>,
    pub postal_code : Option<String>,
    pub country     : Option<String>,
    pub lat         : Option<Option<f64>>,
    pub lng         : Option<Option<f64>>,
}

pub fn prepare_updated_address<R: AddressRepo>(
    repo: &R,
    id: &str,
    update: UpdateAddress,
) -> Result<Storable> {
    let old = repo.get_address(id)?;
    let UpdateAddress {
        name,
        building,
        area,
        city,
        postal_code,
        country,
        lat,
        lng,
    } = update;
    let old_lat = old.pos.map(|pos| pos.lat().to_deg());
    let old_lng = old.pos.map(|pos| pos.lng().to_deg());
    let pos = pos_from_coords(lat.unwrap_or(old_lat), lng.unwrap_or(old_lng))?;
    let address = Address {
        id: old.id,
        name: name.unwrap_or(old.name),
        building: building.unwrap_or(old.building),
        area: area.unwrap_or(old.area),
        city: city.unwrap_or(old.city),
        postal_code: postal_code.unwrap_or(old.postal_code),
        country: country.unwrap_or(old.country),
        pos,
        created_at: old.created_at,
        updated_at: Timestamp::now().max(old.updated_at),
    };
    Storable::try_new(address)
}

pub fn store_updated_address<R: AddressRepo>(repo: &R, s: Storable) -> Result<Address> {
    let Storable(address) = s;
    if !address.has_valid_pos() {
        info!("Storing address {} without a position", address.id);
    }
    debug!("Storing updated address: {:?}", address);
    repo.update_address(&address)?;
    Ok(address)
}
