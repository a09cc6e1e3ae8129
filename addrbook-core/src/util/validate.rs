use std::ops::RangeInclusive;

use addrbook_entities::{address::Address, geo::Distance};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub const NAME_MAX_LEN: usize = 100;
pub const BUILDING_MAX_LEN: usize = 255;
pub const AREA_MAX_LEN: usize = 255;
pub const CITY_MAX_LEN: usize = 100;
pub const COUNTRY_MAX_LEN: usize = 100;
pub const POSTAL_CODE_LEN: RangeInclusive<usize> = 5..=10;

/// Minimum number of characters of a free-text address query.
pub const ADDRESS_QUERY_MIN_LEN: usize = 3;

fn char_count(s: &str) -> usize {
    s.chars().count()
}

pub fn is_valid_radius(radius: Distance) -> bool {
    radius.to_km() > 0.0 && radius.to_km().is_finite()
}

pub fn is_valid_address_query(query: &str) -> bool {
    char_count(query.trim()) >= ADDRESS_QUERY_MIN_LEN
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressInvalidation {
    #[error("The name must not exceed {NAME_MAX_LEN} characters")]
    Name,
    #[error("The building must not exceed {BUILDING_MAX_LEN} characters")]
    Building,
    #[error("The area must not exceed {AREA_MAX_LEN} characters")]
    Area,
    #[error("The city must not exceed {CITY_MAX_LEN} characters")]
    City,
    #[error("The postal code must have between 5 and 10 characters")]
    PostalCode,
    #[error("The country must not exceed {COUNTRY_MAX_LEN} characters")]
    Country,
    #[error("Invalid position")]
    Position,
}

impl Validate for Address {
    type Error = AddressInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if char_count(&self.name) > NAME_MAX_LEN {
            return Err(Self::Error::Name);
        }
        if char_count(&self.building) > BUILDING_MAX_LEN {
            return Err(Self::Error::Building);
        }
        if char_count(&self.area) > AREA_MAX_LEN {
            return Err(Self::Error::Area);
        }
        if char_count(&self.city) > CITY_MAX_LEN {
            return Err(Self::Error::City);
        }
        if !POSTAL_CODE_LEN.contains(&char_count(&self.postal_code)) {
            return Err(Self::Error::PostalCode);
        }
        if char_count(&self.country) > COUNTRY_MAX_LEN {
            return Err(Self::Error::Country);
        }
        if self.pos.is_some() && !self.has_valid_pos() {
            return Err(Self::Error::Position);
        }
        Ok(())
    }
}
