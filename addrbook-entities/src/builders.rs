pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::address_builder::*;

pub mod address_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*, time::*};

    #[derive(Debug)]
    pub struct AddressBuild {
        address: Address,
    }

    impl AddressBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.address.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.address.name = name.into();
            self
        }
        pub fn building(mut self, building: &str) -> Self {
            self.address.building = building.into();
            self
        }
        pub fn area(mut self, area: &str) -> Self {
            self.address.area = area.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.address.city = city.into();
            self
        }
        pub fn postal_code(mut self, postal_code: &str) -> Self {
            self.address.postal_code = postal_code.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.address.country = country.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.address.pos = Some(pos);
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.address.created_at = created_at;
            self.address.updated_at = created_at;
            self
        }
        pub fn finish(self) -> Address {
            self.address
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> AddressBuild {
            let now = Timestamp::now();
            AddressBuild {
                address: Address {
                    id: Id::new(),
                    name: "".into(),
                    building: "".into(),
                    area: "".into(),
                    city: "".into(),
                    postal_code: "12345".into(),
                    country: "".into(),
                    pos: None,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
