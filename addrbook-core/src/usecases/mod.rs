use crate::{entities::*, util::validate::Validate};

mod create_new_address;
mod delete_address;
mod error;
mod geocode;
mod get_address;
mod search;
mod update_address;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_new_address::*, delete_address::*, error::Error, geocode::*, get_address::*,
    search::*, update_address::*,
};

mod prelude {
    pub use super::{error::Error, Storable};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::geocode::GeoCodingGateway,
        repositories::AddressRepo,
    };
}

type Result<T> = std::result::Result<T, Error>;

/// A validated address that is ready to be stored.
#[derive(Debug, Clone)]
pub struct Storable(Address);

impl Storable {
    fn try_new(address: Address) -> Result<Self> {
        address.validate()?;
        Ok(Self(address))
    }

    pub fn address(&self) -> &Address {
        &self.0
    }

    pub fn has_valid_pos(&self) -> bool {
        self.0.has_valid_pos()
    }
}

/// Both coordinates are needed for a position.
///
/// Every supplied coordinate must be within its valid range,
/// even if the other one is missing.
fn pos_from_coords(lat: Option<f64>, lng: Option<f64>) -> Result<Option<MapPoint>> {
    let lat = lat
        .map(|deg| LatCoord::try_from_deg(deg).ok_or(Error::InvalidPosition))
        .transpose()?;
    let lng = lng
        .map(|deg| LngCoord::try_from_deg(deg).ok_or(Error::InvalidPosition))
        .transpose()?;
    Ok(lat.zip(lng).map(|(lat, lng)| MapPoint::new(lat, lng)))
}

#[cfg(test)]
mod pos_tests {
    use super::*;

    #[test]
    fn complete_position() {
        let pos = pos_from_coords(Some(48.7), Some(9.1)).unwrap();
        assert_eq!(pos, Some(MapPoint::from_lat_lng_deg(48.7, 9.1)));
    }

    #[test]
    fn incomplete_position_is_missing() {
        assert_eq!(pos_from_coords(Some(48.7), None).unwrap(), None);
        assert_eq!(pos_from_coords(None, Some(9.1)).unwrap(), None);
        assert_eq!(pos_from_coords(None, None).unwrap(), None);
    }

    #[test]
    fn out_of_range_coordinates() {
        assert!(matches!(
            pos_from_coords(Some(90.1), Some(0.0)),
            Err(Error::InvalidPosition)
        ));
        assert!(matches!(
            pos_from_coords(None, Some(-180.5)),
            Err(Error::InvalidPosition)
        ));
        assert!(matches!(
            pos_from_coords(Some(f64::NAN), None),
            Err(Error::InvalidPosition)
        ));
    }
}
