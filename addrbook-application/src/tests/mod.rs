pub mod prelude {
    use std::cell::{Cell, RefCell};

    pub use addrbook_core::{entities::*, repositories::Error as RepoError, usecases};

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Geocoder with a fixed answer that records all queries.
    #[derive(Default)]
    pub struct DummyGeoGW {
        pub result: Option<(f64, f64)>,
        pub queries: RefCell<Vec<String>>,
        calls: Cell<usize>,
    }

    impl DummyGeoGW {
        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl addrbook_core::gateways::geocode::GeoCodingGateway for DummyGeoGW {
        fn resolve_address_lat_lng(&self, query: &str) -> Option<(f64, f64)> {
            self.calls.set(self.calls.get() + 1);
            self.queries.borrow_mut().push(query.to_owned());
            self.result
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub geo: DummyGeoGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            addrbook_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                geo: DummyGeoGW::default(),
            }
        }

        pub fn with_geocoding_result(lat: f64, lng: f64) -> Self {
            let mut fixture = Self::new();
            fixture.geo.result = Some((lat, lng));
            fixture
        }

        pub fn create_address(&self, new_address: usecases::NewAddress) -> Address {
            flows::create_address(&self.db_connections, &self.geo, new_address).unwrap()
        }

        pub fn count_addresses(&self) -> usize {
            use addrbook_core::repositories::AddressRepo as _;
            self.db_connections
                .shared()
                .unwrap()
                .count_addresses()
                .unwrap()
        }
    }

    pub fn new_address(name: &str, lat_lng: Option<(f64, f64)>) -> usecases::NewAddress {
        usecases::NewAddress {
            name: name.into(),
            building: "Königstraße 1".into(),
            area: "Mitte".into(),
            city: "Stuttgart".into(),
            postal_code: "70173".into(),
            country: "Germany".into(),
            lat: lat_lng.map(|(lat, _)| lat),
            lng: lat_lng.map(|(_, lng)| lng),
        }
    }
}

mod create_address;
mod search;
