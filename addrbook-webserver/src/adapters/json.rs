pub use addrbook_boundary::*;

use addrbook_core::usecases;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_address(from: NewAddress) -> usecases::NewAddress {
        let NewAddress {
            name,
            building,
            area,
            city,
            postal_code,
            country,
            latitude,
            longitude,
        } = from;
        usecases::NewAddress {
            name,
            building,
            area,
            city,
            postal_code,
            country,
            lat: latitude,
            lng: longitude,
        }
    }

    pub fn update_address(from: UpdateAddress) -> usecases::UpdateAddress {
        let UpdateAddress {
            name,
            building,
            area,
            city,
            postal_code,
            country,
            latitude,
            longitude,
        } = from;
        usecases::UpdateAddress {
            name,
            building,
            area,
            city,
            postal_code,
            country,
            lat: latitude,
            lng: longitude,
        }
    }
}
