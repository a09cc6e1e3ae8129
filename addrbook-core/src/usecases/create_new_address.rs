use super::{pos_from_coords, prelude::*};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub name        : String,
    pub building    : String,
    pub area        : String,
    pub city        : String,
    pub postal_code : String,
    pub country     : String,
    pub lat         : Option<f64>,
    pub lng         : Option<f64>,
}

pub fn prepare_new_address(new_address: NewAddress) -> Result<Storable> {
    let NewAddress {
        name,
        building,
        area,
        city,
        postal_code,
        country,
        lat,
        lng,
    } = new_address;
    let pos = pos_from_coords(lat, lng)?;
    let now = Timestamp::now();
    let address = Address {
        id: Id::new(),
        name,
        building,
        area,
        city,
        postal_code,
        country,
        pos,
        created_at: now,
        updated_at: now,
    };
    Storable::try_new(address)
}

/// New addresses are only stored with a valid position.
pub fn store_new_address<R: AddressRepo>(repo: &R, s: Storable) -> Result<Address> {
    let Storable(address) = s;
    if !address.has_valid_pos() {
        return Err(Error::Geocoding);
    }
    debug!("Storing new address: {:?}", address);
    repo.create_address(&address)?;
    Ok(address)
}
