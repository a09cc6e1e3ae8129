use crate::{repositories, util::validate::AddressInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is too long")]
    Name,
    #[error("The building is too long")]
    Building,
    #[error("The area is too long")]
    Area,
    #[error("The city is too long")]
    City,
    #[error("The postal code must have between 5 and 10 characters")]
    PostalCode,
    #[error("The country is too long")]
    Country,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The radius must be a positive number of kilometers")]
    InvalidRadius,
    #[error("The address must have at least 3 characters")]
    AddressQuery,
    #[error("The address could not be geocoded")]
    Geocoding,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<AddressInvalidation> for Error {
    fn from(err: AddressInvalidation) -> Self {
        match err {
            AddressInvalidation::Name => Self::Name,
            AddressInvalidation::Building => Self::Building,
            AddressInvalidation::Area => Self::Area,
            AddressInvalidation::City => Self::City,
            AddressInvalidation::PostalCode => Self::PostalCode,
            AddressInvalidation::Country => Self::Country,
            AddressInvalidation::Position => Self::InvalidPosition,
        }
    }
}
